//! Chart title with station attribution.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Station the bundle came from
    #[props(default = String::new())]
    pub source: String,
    /// e.g. "1990-08-01 to 2025-04-30"
    #[props(default = String::new())]
    pub data_range: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: #666;",
                "Cumulative snowfall in inches, by day of season (Aug 1 = day 0)"
            }
            if !props.source.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Data: {props.source}"
                    if !props.data_range.is_empty() {
                        " ({props.data_range})"
                    }
                }
            }
        }
    }
}
