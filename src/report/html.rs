//! A standalone HTML report with the monthly chart and summary table.

use charming::Chart;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{config::ReportConfig, report::format::format_currency, summary::SummaryRow};

const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";
const CHART_ID: &str = "monthly-chart";

const REPORT_STYLE: &str = r#"
    body {
        font-family: system-ui, sans-serif;
        margin: 2rem auto;
        max-width: 960px;
        color: #333333;
    }
    #monthly-chart {
        min-height: 380px;
    }
    table {
        border-collapse: collapse;
        width: 100%;
    }
    th, td {
        border: 1px solid #cccccc;
        padding: 0.4rem 0.8rem;
    }
    th {
        background: #f3f4f6;
        text-align: left;
    }
    td.amount {
        text-align: right;
        white-space: nowrap;
    }
"#;

/// Renders the full report page.
///
/// `chart` is `None` when there was nothing to plot, in which case a note is
/// shown in place of the chart.
pub fn render_html_report(config: &ReportConfig, chart: Option<&Chart>, rows: &[SummaryRow]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                style { (PreEscaped(REPORT_STYLE)) }

                @if let Some(chart) = chart {
                    script src=(ECHARTS_URL) {}
                    script { (chart_script(chart)) }
                }
            }

            body
            {
                h1 { (config.title) }
                p class="company" { (config.company_name) }

                h2 { "Monthly Income vs Expenses Chart" }

                @if chart.is_some() {
                    div id=(CHART_ID) {}
                } @else {
                    p class="chart-skipped" { "No income or expenses to plot, the chart was skipped." }
                }

                h2 { "Monthly Summary by Category" }

                (summary_table(rows))
            }
        }
    }
}

fn summary_table(rows: &[SummaryRow]) -> Markup {
    html! {
        table id="monthly-summary-table"
        {
            thead
            {
                tr
                {
                    th scope="col" { "month" }
                    th scope="col" { "category" }
                    th scope="col" { "Income" }
                    th scope="col" { "Expense" }
                }
            }
            tbody
            {
                @for row in rows {
                    tr
                    {
                        td { (row.month.name()) }
                        td { (row.category) }
                        td class="amount" { (format_currency(row.income)) }
                        td class="amount" { (format_currency(row.expense)) }
                    }
                }
            }
        }
    }
}

/// JavaScript that draws `chart` into the chart container once the page loads.
fn chart_script(chart: &Chart) -> PreEscaped<String> {
    PreEscaped(format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chart = echarts.init(document.getElementById("{CHART_ID}"));
            const option = {chart};
            chart.setOption(option);
            window.addEventListener('resize', chart.resize);
        }});"#
    ))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        config::ReportConfig,
        month::CanonicalMonth,
        report::chart::monthly_chart,
        summary::{MonthlyTotal, SummaryRow},
    };

    use super::render_html_report;

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    fn rows() -> Vec<SummaryRow> {
        vec![
            SummaryRow {
                month: CanonicalMonth::January,
                category: "Groceries".to_owned(),
                income: 0.0,
                expense: 100.5,
            },
            SummaryRow {
                month: CanonicalMonth::January,
                category: "Salary".to_owned(),
                income: 2000.25,
                expense: 0.0,
            },
        ]
    }

    #[test]
    fn renders_summary_table() {
        let config = ReportConfig::default();

        let markup = render_html_report(&config, None, &rows()).into_string();
        let html = Html::parse_document(&markup);

        assert_valid_html(&html);
        let row_selector = Selector::parse("#monthly-summary-table tbody tr").unwrap();
        let cell_selector = Selector::parse("td").unwrap();
        let table_rows: Vec<Vec<String>> = html
            .select(&row_selector)
            .map(|row| {
                row.select(&cell_selector)
                    .map(|cell| cell.text().collect::<String>())
                    .collect()
            })
            .collect();
        assert_eq!(
            table_rows,
            vec![
                vec!["January", "Groceries", "$0.00", "$100.50"],
                vec!["January", "Salary", "$2,000.25", "$0.00"],
            ]
        );
    }

    #[test]
    fn table_header_uses_summary_column_names() {
        let markup = render_html_report(&ReportConfig::default(), None, &rows()).into_string();
        let html = Html::parse_document(&markup);

        let header_selector = Selector::parse("#monthly-summary-table thead th").unwrap();
        let headers: Vec<String> = html
            .select(&header_selector)
            .map(|cell| cell.text().collect::<String>())
            .collect();
        assert_eq!(headers, vec!["month", "category", "Income", "Expense"]);
    }

    #[test]
    fn shows_title_and_company() {
        let config = ReportConfig {
            title: "Quarterly Numbers".to_owned(),
            company_name: "Widgets Ltd.".to_owned(),
            ..Default::default()
        };

        let markup = render_html_report(&config, None, &rows()).into_string();
        let html = Html::parse_document(&markup);

        let h1 = Selector::parse("h1").unwrap();
        let company = Selector::parse("p.company").unwrap();
        assert_eq!(
            html.select(&h1).next().unwrap().text().collect::<String>(),
            "Quarterly Numbers"
        );
        assert_eq!(
            html.select(&company).next().unwrap().text().collect::<String>(),
            "Widgets Ltd."
        );
    }

    #[test]
    fn notes_when_chart_is_skipped() {
        let markup = render_html_report(&ReportConfig::default(), None, &rows()).into_string();
        let html = Html::parse_document(&markup);

        assert!(html.select(&Selector::parse("#monthly-chart").unwrap()).next().is_none());
        assert!(html.select(&Selector::parse("p.chart-skipped").unwrap()).next().is_some());
    }

    #[test]
    fn embeds_chart_when_present() {
        let totals = vec![MonthlyTotal {
            month: CanonicalMonth::January,
            income: 2000.25,
            expense: 100.5,
        }];
        let chart = monthly_chart(&totals, "My Company Inc.").unwrap();

        let markup =
            render_html_report(&ReportConfig::default(), Some(&chart), &rows()).into_string();
        let html = Html::parse_document(&markup);

        assert_valid_html(&html);
        assert!(html.select(&Selector::parse("#monthly-chart").unwrap()).next().is_some());
        assert!(markup.contains("echarts.init"));
        assert!(markup.contains("Monthly Income vs Expenses"));
    }
}
