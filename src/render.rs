//! Terminal tables for calculator results.

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use core_types::{
    CandidateMetrics, ComparisonInputs, ComparisonResults, FinancingResults, FlipResults,
    MaoResults, ProjectFinancingResults, ProjectInputs,
};
use rust_decimal::Decimal;

/// Formats monetary values and percentages at a fixed precision.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    decimal_places: u32,
}

impl Report {
    pub fn new(decimal_places: u32) -> Self {
        Self { decimal_places }
    }

    fn fixed(&self, value: Decimal) -> String {
        format!("{:.*}", self.decimal_places as usize, value)
    }

    pub fn money(&self, value: Decimal) -> String {
        if value.is_sign_negative() && !value.is_zero() {
            format!("-${}", self.fixed(value.abs()))
        } else {
            format!("${}", self.fixed(value))
        }
    }

    pub fn percent(&self, value: Decimal) -> String {
        format!("{}%", self.fixed(value))
    }

    /// An undefined ratio renders as `n/a`.
    pub fn ratio(&self, value: Option<Decimal>) -> String {
        value.map_or_else(|| "n/a".to_string(), |v| self.percent(v))
    }

    fn table(&self, header: Vec<&str>) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(header);
        for index in 1..table.column_count() {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        table
    }

    fn metrics(&self, rows: Vec<(&str, String)>) -> Table {
        let mut table = self.table(vec!["Metric", "Value"]);
        for (label, value) in rows {
            table.add_row(vec![Cell::new(label), Cell::new(value)]);
        }
        table
    }

    pub fn financing(&self, results: &FinancingResults) -> Table {
        self.metrics(vec![
            ("Monthly P&I", self.money(results.monthly_principal_and_interest)),
            ("Monthly Expenses", self.money(results.monthly_expenses)),
            ("Monthly Cash Flow", self.money(results.monthly_cash_flow)),
            ("Annual Cash Flow", self.money(results.annual_cash_flow())),
            ("Cap Rate", self.percent(results.cap_rate_pct)),
            ("Cash-on-Cash Return", self.ratio(results.cash_on_cash_return_pct)),
            ("Total Investment", self.money(results.total_investment)),
        ])
    }

    pub fn flip(&self, results: &FlipResults) -> Table {
        self.metrics(vec![
            ("Total Investment", self.money(results.total_investment)),
            ("Total Revenue", self.money(results.total_revenue)),
            ("Profit", self.money(results.profit)),
            ("ROI", self.ratio(results.roi_pct)),
        ])
    }

    pub fn mao(&self, results: &MaoResults) -> Table {
        self.metrics(vec![
            ("Maximum Allowable Offer", self.money(results.maximum_allowable_offer)),
            ("Total Costs", self.money(results.total_costs)),
            ("Profit", self.money(results.profit)),
        ])
    }

    pub fn comparison(&self, inputs: &ComparisonInputs, results: &ComparisonResults) -> Table {
        let mut table = self.table(vec![
            "Metric",
            column_name(&inputs.first.name, "First"),
            column_name(&inputs.second.name, "Second"),
        ]);
        let rows: [(&str, fn(&Self, &CandidateMetrics) -> String); 3] = [
            ("Monthly Cash Flow", |r, m| r.money(m.monthly_cash_flow)),
            ("Cap Rate", |r, m| r.percent(m.cap_rate_pct)),
            ("ROI", |r, m| r.percent(m.roi_pct)),
        ];
        for (label, render) in rows {
            table.add_row(vec![
                Cell::new(label),
                Cell::new(render(self, &results.first)),
                Cell::new(render(self, &results.second)),
            ]);
        }
        table
    }

    pub fn project(&self, inputs: &ProjectInputs, results: &ProjectFinancingResults) -> Table {
        let mut rows = vec![
            ("Loan Amount", self.money(results.loan_amount)),
            ("Monthly Payment", self.money(results.monthly_payment)),
            ("Total Interest", self.money(results.total_interest)),
            ("Total Cost", self.money(results.total_cost)),
            ("Cash-on-Cash Return", self.ratio(results.cash_on_cash_return_pct)),
            ("ROI", self.ratio(results.roi_pct)),
        ];
        if !inputs.property.custom_expenses.is_empty() {
            rows.push((
                "Custom Expenses",
                self.money(inputs.property.custom_expenses_total()),
            ));
        }
        self.metrics(rows)
    }
}

fn column_name<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.trim().is_empty() {
        fallback
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_is_rounded_to_the_configured_precision() {
        let report = Report::new(2);
        assert_eq!(report.money(dec!(899.327)), "$899.33");
        assert_eq!(report.money(dec!(-13000)), "-$13000.00");
        assert_eq!(report.money(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn undefined_ratio_renders_as_not_available() {
        let report = Report::new(1);
        assert_eq!(report.ratio(None), "n/a");
        assert_eq!(report.ratio(Some(dec!(9.6552))), "9.7%");
    }

    #[test]
    fn comparison_has_a_column_per_property() {
        let report = Report::new(2);
        let inputs = ComparisonInputs::default();
        let mut table = report.comparison(&inputs, &ComparisonResults::default());
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 3);
    }
}
