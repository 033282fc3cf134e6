use dioxus::prelude::*;

use crate::vm::{CHART_HEIGHT, CHART_TITLE, CHART_WIDTH, CHART_Y_LABEL, ProfileChartVm};

#[component]
pub fn ProfileChart(chart: ProfileChartVm) -> Element {
    let title_x = CHART_WIDTH / 2;
    let axis_label_y = chart.plot_top + (chart.baseline_y - chart.plot_top) / 2;
    let axis_label_transform = format!("rotate(-90 16 {axis_label_y})");
    let tick_label_y = chart.baseline_y + 18;

    rsx! {
        section { class: "profile",
            p { class: "profile-summary",
                strong { "Perfil del inversor: " }
                "{chart.summary}"
            }
            svg {
                class: "profile-chart",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                role: "img",
                "aria-label": "{CHART_TITLE}",
                text {
                    class: "chart-title",
                    x: "{title_x}",
                    y: "18",
                    text_anchor: "middle",
                    "{CHART_TITLE}"
                }
                text {
                    class: "chart-axis-label",
                    x: "16",
                    y: "{axis_label_y}",
                    transform: "{axis_label_transform}",
                    text_anchor: "middle",
                    "{CHART_Y_LABEL}"
                }
                line {
                    class: "chart-baseline",
                    x1: "{chart.plot_left}",
                    y1: "{chart.baseline_y}",
                    x2: "{CHART_WIDTH}",
                    y2: "{chart.baseline_y}",
                }
                for bar in chart.bars {
                    g { key: "{bar.label}", class: "chart-bar-group",
                        rect {
                            class: "chart-bar",
                            x: "{bar.x}",
                            y: "{bar.y}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                        }
                        text {
                            class: "chart-value",
                            x: "{bar.center_x}",
                            y: "{bar.value_y}",
                            text_anchor: "middle",
                            "{bar.score}"
                        }
                        text {
                            class: "chart-tick",
                            x: "{bar.center_x}",
                            y: "{tick_label_y}",
                            text_anchor: "middle",
                            "{bar.label}"
                        }
                    }
                }
            }
        }
    }
}
