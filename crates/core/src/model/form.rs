use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    #[error("investment objective is required")]
    MissingObjective,

    #[error("investment horizon is required")]
    MissingHorizon,
}

//
// ─── OPTIONS ──────────────────────────────────────────────────────────────────
//

/// 2.1. Main goal when investing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentObjective {
    PreserveCapital,
    ModerateReturn,
    MaximizeReturn,
}

impl InvestmentObjective {
    pub const ALL: [InvestmentObjective; 3] = [
        InvestmentObjective::PreserveCapital,
        InvestmentObjective::ModerateReturn,
        InvestmentObjective::MaximizeReturn,
    ];

    pub const QUESTION: &'static str = "2.1. ¿Cuál es tu objetivo principal al invertir?";

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InvestmentObjective::PreserveCapital => "Preservar el capital (bajo riesgo)",
            InvestmentObjective::ModerateReturn => "Obtener rentabilidad moderada",
            InvestmentObjective::MaximizeReturn => "Maximizar la rentabilidad (alto riesgo)",
        }
    }
}

/// 2.2. Investment time horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentHorizon {
    UnderOneYear,
    OneToFiveYears,
    OverFiveYears,
}

impl InvestmentHorizon {
    pub const ALL: [InvestmentHorizon; 3] = [
        InvestmentHorizon::UnderOneYear,
        InvestmentHorizon::OneToFiveYears,
        InvestmentHorizon::OverFiveYears,
    ];

    pub const QUESTION: &'static str = "2.2. ¿Cuál es tu horizonte temporal de inversión?";

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InvestmentHorizon::UnderOneYear => "Menos de 1 año",
            InvestmentHorizon::OneToFiveYears => "Entre 1 y 5 años",
            InvestmentHorizon::OverFiveYears => "Más de 5 años",
        }
    }
}

/// 3.1. Products the investor knows or has used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FinancialProduct {
    SavingsAccounts,
    InvestmentFunds,
    Stocks,
    Bonds,
    Derivatives,
    Crypto,
}

impl FinancialProduct {
    pub const ALL: [FinancialProduct; 6] = [
        FinancialProduct::SavingsAccounts,
        FinancialProduct::InvestmentFunds,
        FinancialProduct::Stocks,
        FinancialProduct::Bonds,
        FinancialProduct::Derivatives,
        FinancialProduct::Crypto,
    ];

    pub const QUESTION: &'static str = "3.1. ¿Qué productos financieros conoces o has utilizado?";

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FinancialProduct::SavingsAccounts => "Cuentas de ahorro",
            FinancialProduct::InvestmentFunds => "Fondos de inversión",
            FinancialProduct::Stocks => "Acciones",
            FinancialProduct::Bonds => "Bonos",
            FinancialProduct::Derivatives => "Derivados (futuros, opciones, CFD)",
            FinancialProduct::Crypto => "Criptomonedas",
        }
    }
}

//
// ─── FORM ─────────────────────────────────────────────────────────────────────
//

/// Form as edited in the UI. Radios start unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalQuestionnaireDraft {
    pub objective: Option<InvestmentObjective>,
    pub horizon: Option<InvestmentHorizon>,
    pub products: Vec<FinancialProduct>,
}

impl FinalQuestionnaireDraft {
    /// Adds the product if absent, removes it otherwise.
    pub fn toggle_product(&mut self, product: FinancialProduct) {
        if let Some(pos) = self.products.iter().position(|p| *p == product) {
            self.products.remove(pos);
        } else {
            self.products.push(product);
        }
    }

    #[must_use]
    pub fn has_product(&self, product: FinancialProduct) -> bool {
        self.products.contains(&product)
    }

    /// # Errors
    ///
    /// Returns `FormError` when a required radio is unselected.
    pub fn validate(&self) -> Result<FinalQuestionnaire, FormError> {
        let objective = self.objective.ok_or(FormError::MissingObjective)?;
        let horizon = self.horizon.ok_or(FormError::MissingHorizon)?;
        let mut products = self.products.clone();
        products.sort_unstable();
        products.dedup();
        Ok(FinalQuestionnaire {
            objective,
            horizon,
            products,
        })
    }
}

/// A validated final form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalQuestionnaire {
    objective: InvestmentObjective,
    horizon: InvestmentHorizon,
    products: Vec<FinancialProduct>,
}

impl FinalQuestionnaire {
    #[must_use]
    pub fn objective(&self) -> InvestmentObjective {
        self.objective
    }

    #[must_use]
    pub fn horizon(&self) -> InvestmentHorizon {
        self.horizon
    }

    #[must_use]
    pub fn products(&self) -> &[FinancialProduct] {
        &self.products
    }
}
