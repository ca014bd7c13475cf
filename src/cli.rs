use clap::{Args, Parser, Subcommand};
use core_types::{
    ComparisonInputs, DownPayment, FlipInputs, MaoInputs, ProjectInputs, RentalScenario,
};
use rust_decimal::Decimal;
use std::path::PathBuf;

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Real-estate investment calculators: rental financing, fix and flip,
/// maximum allowable offer, side-by-side comparison and project financing.
///
/// Each calculator starts from the inputs saved by its last successful run.
/// Flags override individual fields.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cash flow, cap rate and cash-on-cash return of a financed rental.
    Financing(FinancingArgs),
    /// Profit and ROI of a fix-and-flip.
    Flip(FlipArgs),
    /// Maximum allowable offer for a target profit.
    Mao(MaoArgs),
    /// Compare two rental properties side by side.
    Compare(CompareArgs),
    /// Total cost and returns of a value-add project bought with a loan.
    Project(ProjectArgs),
    /// Clear the saved inputs of every calculator.
    ResetAll,
}

/// Overwrites `target` when a flag was given.
fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[derive(Args)]
pub struct FinancingArgs {
    /// Restore the default inputs instead of calculating.
    #[arg(long)]
    pub reset: bool,

    #[arg(long)]
    pub purchase_price: Option<Decimal>,
    #[arg(long)]
    pub monthly_rent: Option<Decimal>,
    /// Annual property tax.
    #[arg(long)]
    pub property_tax: Option<Decimal>,
    /// Annual insurance premium.
    #[arg(long)]
    pub insurance: Option<Decimal>,
    /// Monthly HOA dues.
    #[arg(long)]
    pub hoa_fees: Option<Decimal>,
    /// Monthly maintenance reserve.
    #[arg(long)]
    pub maintenance: Option<Decimal>,
    /// Vacancy, as a percentage of gross rent.
    #[arg(long)]
    pub vacancy_rate: Option<Decimal>,
    /// Property management, as a percentage of gross rent.
    #[arg(long)]
    pub management_rate: Option<Decimal>,
    /// Down payment, as a percentage of the purchase price.
    #[arg(long)]
    pub down_payment: Option<Decimal>,
    /// Annual interest rate, in percent.
    #[arg(long)]
    pub interest_rate: Option<Decimal>,
    #[arg(long)]
    pub loan_term: Option<u32>,
    #[arg(long)]
    pub closing_costs: Option<Decimal>,
}

impl FinancingArgs {
    pub fn apply(&self, inputs: &mut RentalScenario) {
        let property = &mut inputs.property;
        set(&mut property.purchase_price, self.purchase_price);
        set(&mut property.monthly_rent, self.monthly_rent);
        set(&mut property.property_tax, self.property_tax);
        set(&mut property.insurance, self.insurance);
        set(&mut property.hoa_fees, self.hoa_fees);
        set(&mut property.maintenance, self.maintenance);
        set(&mut property.vacancy_rate_pct, self.vacancy_rate);
        set(&mut property.property_management_rate_pct, self.management_rate);

        let financing = &mut inputs.financing;
        set(&mut financing.down_payment_pct, self.down_payment);
        set(&mut financing.interest_rate_pct, self.interest_rate);
        set(&mut financing.loan_term_years, self.loan_term);
        set(&mut financing.closing_costs, self.closing_costs);
    }
}

#[derive(Args)]
pub struct FlipArgs {
    /// Restore the default inputs instead of calculating.
    #[arg(long)]
    pub reset: bool,

    #[arg(long)]
    pub purchase_price: Option<Decimal>,
    #[arg(long)]
    pub repair_costs: Option<Decimal>,
    #[arg(long)]
    pub holding_costs: Option<Decimal>,
    #[arg(long)]
    pub selling_price: Option<Decimal>,
    #[arg(long)]
    pub selling_costs: Option<Decimal>,
}

impl FlipArgs {
    pub fn apply(&self, inputs: &mut FlipInputs) {
        set(&mut inputs.purchase_price, self.purchase_price);
        set(&mut inputs.repair_costs, self.repair_costs);
        set(&mut inputs.holding_costs, self.holding_costs);
        set(&mut inputs.selling_price, self.selling_price);
        set(&mut inputs.selling_costs, self.selling_costs);
    }
}

#[derive(Args)]
pub struct MaoArgs {
    /// Restore the default inputs instead of calculating.
    #[arg(long)]
    pub reset: bool,

    /// After-repair value.
    #[arg(long)]
    pub arv: Option<Decimal>,
    #[arg(long)]
    pub repair_costs: Option<Decimal>,
    #[arg(long)]
    pub desired_profit: Option<Decimal>,
    #[arg(long)]
    pub holding_costs: Option<Decimal>,
    #[arg(long)]
    pub selling_costs: Option<Decimal>,
}

impl MaoArgs {
    pub fn apply(&self, inputs: &mut MaoInputs) {
        set(&mut inputs.after_repair_value, self.arv);
        set(&mut inputs.repair_costs, self.repair_costs);
        set(&mut inputs.desired_profit, self.desired_profit);
        set(&mut inputs.holding_costs, self.holding_costs);
        set(&mut inputs.selling_costs, self.selling_costs);
    }
}

#[derive(Args)]
pub struct CompareArgs {
    /// Restore the default inputs instead of calculating.
    #[arg(long)]
    pub reset: bool,

    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub first_price: Option<Decimal>,
    #[arg(long)]
    pub first_rent: Option<Decimal>,
    #[arg(long)]
    pub first_expenses: Option<Decimal>,

    #[arg(long)]
    pub second_name: Option<String>,
    #[arg(long)]
    pub second_price: Option<Decimal>,
    #[arg(long)]
    pub second_rent: Option<Decimal>,
    #[arg(long)]
    pub second_expenses: Option<Decimal>,
}

impl CompareArgs {
    pub fn apply(&self, inputs: &mut ComparisonInputs) {
        set(&mut inputs.first.name, self.first_name.clone());
        set(&mut inputs.first.price, self.first_price);
        set(&mut inputs.first.monthly_rent, self.first_rent);
        set(&mut inputs.first.monthly_expenses, self.first_expenses);

        set(&mut inputs.second.name, self.second_name.clone());
        set(&mut inputs.second.price, self.second_price);
        set(&mut inputs.second.monthly_rent, self.second_rent);
        set(&mut inputs.second.monthly_expenses, self.second_expenses);
    }
}

#[derive(Args)]
pub struct ProjectArgs {
    /// Restore the default inputs instead of calculating.
    #[arg(long)]
    pub reset: bool,

    #[arg(long)]
    pub purchase_price: Option<Decimal>,
    /// After-repair value.
    #[arg(long)]
    pub arv: Option<Decimal>,
    #[arg(long)]
    pub repair_costs: Option<Decimal>,
    #[arg(long)]
    pub closing_costs: Option<Decimal>,
    #[arg(long)]
    pub holding_costs: Option<Decimal>,
    /// A custom expense as `name=amount`. Repeatable.
    #[arg(long = "expense", value_parser = parse_expense)]
    pub expenses: Vec<(String, Decimal)>,

    /// Down payment as a percentage of the purchase price.
    #[arg(long, conflicts_with = "down_payment_amount")]
    pub down_payment_pct: Option<Decimal>,
    /// Down payment as a fixed amount.
    #[arg(long)]
    pub down_payment_amount: Option<Decimal>,
    /// Annual interest rate, in percent.
    #[arg(long)]
    pub interest_rate: Option<Decimal>,
    #[arg(long)]
    pub loan_term: Option<u32>,
    /// Origination points, as a percentage of the loan amount.
    #[arg(long)]
    pub points: Option<Decimal>,
    #[arg(long)]
    pub other_fees: Option<Decimal>,
}

impl ProjectArgs {
    pub fn apply(&self, inputs: &mut ProjectInputs) {
        let property = &mut inputs.property;
        set(&mut property.purchase_price, self.purchase_price);
        set(&mut property.after_repair_value, self.arv);
        set(&mut property.repair_costs, self.repair_costs);
        set(&mut property.closing_costs, self.closing_costs);
        set(&mut property.holding_costs, self.holding_costs);
        for (name, amount) in &self.expenses {
            property.add_custom_expense(name, *amount);
        }

        let loan = &mut inputs.loan;
        set(&mut loan.down_payment, self.down_payment_pct.map(DownPayment::Percent));
        set(&mut loan.down_payment, self.down_payment_amount.map(DownPayment::Amount));
        set(&mut loan.interest_rate_pct, self.interest_rate);
        set(&mut loan.loan_term_years, self.loan_term);
        set(&mut loan.points_pct, self.points);
        set(&mut loan.other_fees, self.other_fees);
    }
}

/// Parses `name=amount` into a custom expense.
fn parse_expense(raw: &str) -> Result<(String, Decimal), String> {
    let (name, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected `name=amount`, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("expense name must not be empty".to_string());
    }
    let amount = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|e| format!("invalid amount `{}`: {e}", amount.trim()))?;
    Ok((name.to_string(), amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_only_the_fields_given() {
        let cli = Cli::parse_from([
            "cornerstone",
            "financing",
            "--purchase-price",
            "200000",
            "--loan-term",
            "15",
        ]);
        let Commands::Financing(args) = cli.command else {
            panic!("expected the financing command");
        };

        let mut inputs = RentalScenario::default();
        args.apply(&mut inputs);
        assert_eq!(inputs.property.purchase_price, dec!(200000));
        assert_eq!(inputs.financing.loan_term_years, 15);
        assert_eq!(inputs.financing.down_payment_pct, dec!(20));
        assert_eq!(inputs.property.vacancy_rate_pct, dec!(5));
    }

    #[test]
    fn project_expenses_and_down_payment_are_parsed() {
        let cli = Cli::parse_from([
            "cornerstone",
            "project",
            "--expense",
            "Permits=1500",
            "--expense",
            "Staging = 2500.50",
            "--down-payment-amount",
            "30000",
        ]);
        let Commands::Project(args) = cli.command else {
            panic!("expected the project command");
        };

        let mut inputs = ProjectInputs::default();
        args.apply(&mut inputs);
        assert_eq!(inputs.property.custom_expenses.len(), 2);
        assert_eq!(inputs.property.custom_expenses_total(), dec!(4000.50));
        assert_eq!(inputs.loan.down_payment, DownPayment::Amount(dec!(30000)));
    }

    #[test]
    fn both_down_payment_forms_conflict() {
        let parsed = Cli::try_parse_from([
            "cornerstone",
            "project",
            "--down-payment-pct",
            "20",
            "--down-payment-amount",
            "30000",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn malformed_expense_is_rejected() {
        assert!(parse_expense("no-separator").is_err());
        assert!(parse_expense("=100").is_err());
        assert!(parse_expense("Permits=abc").is_err());
    }
}
