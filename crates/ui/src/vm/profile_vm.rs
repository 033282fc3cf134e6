use esg_core::model::{EsgProfile, MAX_SCORE, ProfileAxis};

pub const CHART_TITLE: &str = "Perfil del Inversor";
pub const CHART_Y_LABEL: &str = "Puntuación (0-100)";

pub const CHART_WIDTH: u32 = 420;
pub const CHART_HEIGHT: u32 = 260;
const PLOT_TOP: u32 = 30;
const PLOT_HEIGHT: u32 = 180;
const PLOT_LEFT: u32 = 60;
const BAR_WIDTH: u32 = 56;
const BAR_GAP: u32 = (CHART_WIDTH - PLOT_LEFT - 4 * BAR_WIDTH) / 4;

/// One bar in SVG user units; `y` is the top edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileBarVm {
    pub axis: ProfileAxis,
    pub label: &'static str,
    pub score: u8,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Horizontal centre, for the tick and value labels.
    pub center_x: u32,
    /// Baseline of the value label drawn just above the bar.
    pub value_y: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileChartVm {
    pub summary: String,
    pub bars: Vec<ProfileBarVm>,
    pub baseline_y: u32,
    pub plot_left: u32,
    pub plot_top: u32,
}

#[must_use]
pub fn map_profile_chart(profile: &EsgProfile) -> ProfileChartVm {
    let baseline_y = PLOT_TOP + PLOT_HEIGHT;
    let bars = profile
        .scores()
        .iter()
        .enumerate()
        .map(|(slot, (axis, score))| {
            let height = u32::from(*score) * PLOT_HEIGHT / u32::from(MAX_SCORE);
            let slot = u32::try_from(slot).unwrap_or_default();
            let x = PLOT_LEFT + BAR_GAP / 2 + slot * (BAR_WIDTH + BAR_GAP);
            let y = baseline_y - height;
            ProfileBarVm {
                axis: *axis,
                label: axis.label(),
                score: *score,
                x,
                y,
                width: BAR_WIDTH,
                height,
                center_x: x + BAR_WIDTH / 2,
                value_y: y.saturating_sub(4),
            }
        })
        .collect();

    ProfileChartVm {
        summary: profile.summary_line(),
        bars,
        baseline_y,
        plot_left: PLOT_LEFT,
        plot_top: PLOT_TOP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> EsgProfile {
        EsgProfile::parse("Ambiental: 100, Social: 50, Gobernanza: 0, Riesgo: 35").unwrap()
    }

    #[test]
    fn bars_follow_axis_order_and_scale() {
        let chart = map_profile_chart(&profile());
        let labels: Vec<_> = chart.bars.iter().map(|bar| bar.label).collect();
        assert_eq!(labels, ["Ambiental", "Social", "Gobernanza", "Riesgo"]);

        assert_eq!(chart.bars[0].height, PLOT_HEIGHT);
        assert_eq!(chart.bars[0].y, chart.plot_top);
        assert_eq!(chart.bars[1].height, PLOT_HEIGHT / 2);
        assert_eq!(chart.bars[2].height, 0);
        assert_eq!(chart.bars[2].y, chart.baseline_y);
        assert_eq!(chart.bars[3].height, 63);
    }

    #[test]
    fn bars_fit_inside_the_chart() {
        let chart = map_profile_chart(&profile());
        let last = chart.bars.last().unwrap();
        assert!(last.x + last.width <= CHART_WIDTH);
        assert!(chart.baseline_y < CHART_HEIGHT);
        for pair in chart.bars.windows(2) {
            assert!(pair[0].x + pair[0].width < pair[1].x);
        }
    }

    #[test]
    fn summary_lists_all_scores() {
        let chart = map_profile_chart(&profile());
        assert_eq!(chart.summary, "Ambiental: 100, Social: 50, Gobernanza: 0, Riesgo: 35");
    }
}
