//! Chart container component with loading and empty states.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the renderer draws into
    pub id: String,
    #[props(default = false)]
    pub loading: bool,
    /// Nothing falls in the selected range
    #[props(default = false)]
    pub empty: bool,
    #[props(default = 450)]
    pub min_height: u32,
}

/// A container div for the line-chart renderer with loading and empty overlays.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let overlay = if props.loading {
        Some("Loading snowfall data...")
    } else if props.empty {
        Some("No seasons in the selected range")
    } else {
        None
    };

    rsx! {
        div {
            style: "{style}",
            if let Some(text) = overlay {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "{text}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
