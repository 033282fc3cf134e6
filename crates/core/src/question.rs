use serde::{Deserialize, Serialize};

/// Lead-in shown before every headline in the news stage.
pub const NEWS_PROMPT_PREFIX: &str = "¿Qué opinas sobre esta noticia?";

const GENERAL_QUESTIONS: [&str; 5] = [
    "¿Cuál es tu objetivo principal al invertir?",
    "¿Cuál es tu horizonte temporal de inversión?",
    "¿Tienes experiencia previa invirtiendo en activos de mayor riesgo como acciones, criptomonedas o fondos alternativos?",
    "¿Estás dispuesto a sacrificar parte de la rentabilidad potencial a cambio de un impacto social o ambiental positivo?",
    "¿Qué opinas sobre el cambio climático?",
];

const NEWS_HEADLINES: [&str; 5] = [
    "Repsol, entre las 50 empresas que más responsabilidad histórica tienen en el calentamiento global",
    "Amancio Ortega crea un fondo de 100 millones de euros para los afectados de la dana",
    "Freshly Cosmetics despide a 52 empleados en Reus, el 18% de la plantilla",
    "Wall Street y los mercados globales caen ante la incertidumbre por la guerra comercial y el temor a una recesión",
    "El mercado de criptomonedas se desploma: Bitcoin cae a 80.000 dólares, las altcoins se hunden en medio de una frenética liquidación",
];

//
// ─── STAGE ─────────────────────────────────────────────────────────────────────
//

/// The two question blocks, asked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    General,
    News,
}

/// A bot message asking for one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub stage: Stage,
    pub index: usize,
    pub text: String,
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Fixed, ordered questions for one questionnaire run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    general: Vec<String>,
    headlines: Vec<String>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(general: Vec<String>, headlines: Vec<String>) -> Self {
        Self { general, headlines }
    }

    #[must_use]
    pub fn general(&self) -> &[String] {
        &self.general
    }

    #[must_use]
    pub fn headlines(&self) -> &[String] {
        &self.headlines
    }

    /// Number of questions in a stage.
    #[must_use]
    pub fn len(&self, stage: Stage) -> usize {
        match stage {
            Stage::General => self.general.len(),
            Stage::News => self.headlines.len(),
        }
    }

    /// Total number of answers a full run accepts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.general.len() + self.headlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Builds the bot message for `index` within `stage`.
    ///
    /// Headlines are wrapped with [`NEWS_PROMPT_PREFIX`].
    #[must_use]
    pub fn prompt(&self, stage: Stage, index: usize) -> Option<Prompt> {
        let text = match stage {
            Stage::General => self.general.get(index)?.clone(),
            Stage::News => format!("{NEWS_PROMPT_PREFIX} {}", self.headlines.get(index)?),
        };
        Some(Prompt { stage, index, text })
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new(
            GENERAL_QUESTIONS.iter().map(|q| (*q).to_string()).collect(),
            NEWS_HEADLINES.iter().map(|h| (*h).to_string()).collect(),
        )
    }
}
