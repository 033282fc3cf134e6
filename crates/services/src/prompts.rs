//! Fixed prompt templates sent to the language model.

const EVALUATION_TEMPLATE: &str = r#"
Evalúa si esta respuesta del usuario es suficientemente detallada para un análisis ESG.
Criterios:
- Claridad de la opinión
- Especificidad respecto a la noticia o la pregunta original
- Mención de aspectos ESG (ambiental, social, gobernanza o riesgo)
- Identificación de preocupaciones o riesgos

Respuesta del usuario: {respuesta}

Si es vaga o superficial, responde "False".
Si contiene opinión sustancial y analizable, responde "True".

Solo responde "True" o "False".
"#;

const FOLLOW_UP_TEMPLATE: &str = r"
Reacción del inversor: {reaccion}
Genera ÚNICAMENTE una pregunta de seguimiento enfocada en profundizar en su opinión.
";

const PROFILE_TEMPLATE: &str = r"
Análisis de respuestas: {analisis}
Genera un perfil detallado del inversor basado en sus respuestas, enfocándote en los pilares ESG (Ambiental, Social y Gobernanza) y su aversión al riesgo.
Asigna una puntuación de 0 a 100 para cada pilar ESG y para el riesgo, donde 0 indica ninguna preocupación y 100 máxima preocupación o aversión.
Devuelve las 4 puntuaciones en formato: Ambiental: [puntuación], Social: [puntuación], Gobernanza: [puntuación], Riesgo: [puntuación]
";

/// Asks for a bare "True"/"False" sufficiency verdict on one answer.
#[must_use]
pub fn evaluation_prompt(answer: &str) -> String {
    EVALUATION_TEMPLATE.replace("{respuesta}", answer)
}

/// Asks for exactly one clarifying question about a weak answer.
#[must_use]
pub fn follow_up_prompt(reaction: &str) -> String {
    FOLLOW_UP_TEMPLATE.replace("{reaccion}", reaction)
}

/// Asks for the four labelled scores over all accepted answers.
#[must_use]
pub fn profile_prompt(analysis: &str) -> String {
    PROFILE_TEMPLATE.replace("{analisis}", analysis)
}
