//! Chart generation and rendering for the reports page.
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with a corresponding HTML container and JavaScript
//! initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger,
    },
    series::{Line, bar},
};
use maud::PreEscaped;

use crate::{
    category::CategorySpending,
    html::HeadElement,
    store::MonthlyTotal,
};

/// A report chart with its HTML container ID and ECharts configuration.
pub(super) struct ReportChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Generates JavaScript initialization code for the report charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[ReportChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

pub(super) fn monthly_trend_chart(monthly_totals: &[MonthlyTotal]) -> Chart {
    let labels: Vec<String> = monthly_totals
        .iter()
        .map(|total| total.month.to_owned())
        .collect();
    let values: Vec<f64> = monthly_totals.iter().map(|total| total.amount).collect();

    Chart::new()
        .title(Title::new().text("Monthly Trend").subtext("Last six months"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Spending").data(values))
}

pub(super) fn category_breakdown_chart(spending: &[CategorySpending]) -> Chart {
    let labels: Vec<String> = spending
        .iter()
        .map(|summary| summary.category.name.clone())
        .collect();
    let values: Vec<f64> = spending.iter().map(|summary| summary.spent).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Category Breakdown")
                .subtext("Spending per category"),
        )
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Spent").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
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

#[cfg(test)]
mod tests {
    use crate::store::DemoStore;

    use super::{ReportChart, category_breakdown_chart, charts_script, monthly_trend_chart};

    #[test]
    fn monthly_trend_chart_includes_every_month() {
        let store = DemoStore::seeded();

        let options = monthly_trend_chart(store.monthly_totals()).to_string();

        for month in ["Jan", "Feb", "Mar", "Apr", "May", "Jun"] {
            assert!(options.contains(month), "month {month} missing from chart");
        }
    }

    #[test]
    fn category_breakdown_chart_includes_category_names() {
        let store = DemoStore::seeded();

        let options = category_breakdown_chart(&store.category_spending()).to_string();

        assert!(options.contains("Food & Dining"));
        assert!(options.contains("Travel"));
    }

    #[test]
    fn charts_script_initializes_each_container() {
        let charts = [
            ReportChart {
                id: "monthly-trend-chart",
                options: "{}".to_owned(),
            },
            ReportChart {
                id: "category-breakdown-chart",
                options: "{}".to_owned(),
            },
        ];

        let script = match charts_script(&charts) {
            crate::html::HeadElement::ScriptSource(source) => source.0,
            _ => panic!("expected inline script"),
        };

        assert!(script.contains("monthly-trend-chart"));
        assert!(script.contains("category-breakdown-chart"));
    }
}
