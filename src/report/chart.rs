//! Chart of monthly income against expenses.
//!
//! The chart is generated as ECharts options with `charming`. The options
//! can be saved as JSON or embedded in the HTML report.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisPointer, AxisPointerType, AxisLabel, AxisType, JsFunction, Tooltip, Trigger},
    series::bar,
};

use crate::{report::format::round_to_cents, summary::MonthlyTotal};

/// Builds a grouped bar chart with one income and one expense bar per month.
///
/// Months where both totals are zero are left off the chart.
///
/// # Returns
/// `None` if every month is zero and there is nothing to plot.
pub fn monthly_chart(totals: &[MonthlyTotal], subtitle: &str) -> Option<Chart> {
    let shown: Vec<&MonthlyTotal> = totals.iter().filter(|total| !total.is_zero()).collect();

    if shown.is_empty() {
        tracing::warn!("No data to plot. Skipping chart.");
        return None;
    }

    let labels: Vec<String> = shown.iter().map(|total| total.month.to_string()).collect();
    let income: Vec<f64> = shown
        .iter()
        .map(|total| round_to_cents(total.income))
        .collect();
    let expense: Vec<f64> = shown
        .iter()
        .map(|total| round_to_cents(total.expense))
        .collect();

    let chart = Chart::new()
        .title(
            Title::new()
                .text("Monthly Income vs Expenses")
                .subtext(subtitle),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().top(30))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(90)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Income").data(income))
        .series(bar::Bar::new().name("Expense").data(expense));

    Some(chart)
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD',
              maximumFractionDigits: 0
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
