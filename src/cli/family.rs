//! Family member commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::FamilyApi;
use crate::client::models::NewFamilyMember;
use crate::error::{Result, ValidationError};
use crate::models::FamilyDisplay;
use crate::output::Formattable;
use crate::output::json::format_json;

pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let members = ctx.client.list_family_members(ctx.token()?).await?;

    let rows: Vec<FamilyDisplay> = members.into_iter().map(Into::into).collect();
    rows.print(ctx.format)
}

pub async fn add(opts: &GlobalOptions, member: NewFamilyMember) -> Result<()> {
    validate(&member)?;

    let ctx = CommandContext::new(opts)?;
    let created = ctx.client.add_family_member(ctx.token()?, &member).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&created)?);
    } else {
        println!(
            "{} Added {} ({}) as family member #{}",
            "✓".green(),
            created.name.bold(),
            created.relation,
            created.id
        );
    }
    Ok(())
}

fn validate(member: &NewFamilyMember) -> Result<()> {
    for (field, value) in [
        ("name", &member.name),
        ("relation", &member.relation),
        ("gender", &member.gender),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field).into());
        }
    }
    Ok(())
}
