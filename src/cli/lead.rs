use clap::Args;

use crate::lead::{LeadRequest, Plan};
use crate::{App, Result};

/// Leave contact details on the pricing view
#[derive(Args, Debug)]
pub struct LeadCommand {
    /// Full name
    #[arg(long)]
    name: String,
    /// Contact email
    #[arg(long)]
    email: String,
    /// Contact phone number
    #[arg(long)]
    phone: String,
    /// Plan of interest (basic, professional, enterprise)
    #[arg(long)]
    plan: Option<String>,
}

impl LeadCommand {
    pub async fn run(self, app: &App) -> Result<()> {
        let LeadCommand {
            name,
            email,
            phone,
            plan,
        } = self;

        let mut request = LeadRequest::new(name, email, phone);
        if let Some(plan) = plan {
            request = request.with_plan(plan.parse::<Plan>()?);
        }

        let receipt = app.submit_lead(&request).await?;
        println!("{}", receipt.message);

        Ok(())
    }
}
