use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{IagateError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Basic,
    Professional,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Basic, Plan::Professional, Plan::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Basic => "basic",
            Plan::Professional => "professional",
            Plan::Enterprise => "enterprise",
        }
    }

    /// Name shown on the pricing view.
    pub fn display_name(&self) -> &'static str {
        match self {
            Plan::Basic => "Básico",
            Plan::Professional => "Profesional",
            Plan::Enterprise => "Empresarial",
        }
    }

    pub fn recommended(&self) -> bool {
        matches!(self, Plan::Professional)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = IagateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = crate::core::fold_case(s.trim());
        Plan::ALL
            .into_iter()
            .find(|plan| {
                plan.as_str() == folded || crate::core::fold_case(plan.display_name()) == folded
            })
            .ok_or_else(|| IagateError::InvalidRequest(format!("unknown plan {}", s)))
    }
}

/// Contact details left on the pricing view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan: Option<Plan>,
}

impl LeadRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            plan: None,
        }
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(IagateError::InvalidRequest("enter your name".into()));
        }
        if !is_email(self.email.trim()) {
            return Err(IagateError::InvalidRequest(
                "enter a valid email address".into(),
            ));
        }
        if self.phone.trim().is_empty() {
            return Err(IagateError::InvalidRequest("enter a phone number".into()));
        }
        Ok(())
    }
}

fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !s.contains(' ')
        }
        None => false,
    }
}
