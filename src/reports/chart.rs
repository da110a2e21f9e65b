//! The monthly income and expenses bar chart.
//!
//! The chart is built with `charming` and handed to ECharts in the browser as
//! a JSON options object.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    series::Bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{html::HeadElement, transaction::MonthSummary};

/// The ID of the element the chart is drawn into.
pub(super) const CHART_ID: &str = "monthly-chart";

/// The path of the ECharts script served from the static directory.
const ECHARTS_SCRIPT: &str = "/static/echarts.min.js";

/// Income and expenses side by side for each month, oldest month first.
pub(super) fn monthly_chart(months: &[(&str, &MonthSummary)]) -> Chart {
    let labels: Vec<String> = months.iter().map(|(key, _)| (*key).to_owned()).collect();
    let income: Vec<f64> = months
        .iter()
        .map(|(_, summary)| summary.totals.income)
        .collect();
    let expenses: Vec<f64> = months
        .iter()
        .map(|(_, summary)| summary.totals.expenses)
        .collect();

    Chart::new()
        .title(Title::new().text("Income and expenses").subtext("Per month"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().left("center").top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            Bar::new()
                .name("Income")
                .item_style(ItemStyle::new().color("#16a34a"))
                .data(income),
        )
        .series(
            Bar::new()
                .name("Expenses")
                .item_style(ItemStyle::new().color("#dc2626"))
                .data(expenses),
        )
}

/// The container the chart is drawn into.
pub(super) fn chart_view() -> Markup {
    html! {
        div
            id=(CHART_ID)
            class="w-full min-h-[380px] rounded bg-white dark:bg-gray-100 shadow"
        {}
    }
}

/// The scripts that load ECharts and draw `chart` once the page has loaded.
pub(super) fn chart_head_elements(chart: &Chart) -> [HeadElement; 2] {
    // A "</" in a month key must not be able to close the script tag.
    let options = chart.to_string().replace("</", "<\\/");

    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chart = echarts.init(document.getElementById("{CHART_ID}"));
            chart.setOption({options});
            window.addEventListener('resize', chart.resize);
        }});"#
    );

    [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        HeadElement::ScriptSource(PreEscaped(script)),
    ]
}
