use yew::prelude::*;

use crate::palette::indicator_color;
use crate::tooltip::Tooltip;

#[derive(Properties, PartialEq)]
pub struct StatusIndicatorProps {
    pub is_success: bool,
    #[prop_or_default]
    pub children: Children,
}

pub fn circle_classes(is_success: bool) -> Classes {
    classes!(
        indicator_color(is_success).bg_class(),
        "block",
        "w-4",
        "h-4",
        "aspect-square",
        "rounded-full",
        "cursor-zoom-in",
    )
}

/// Colored dot that reveals its children in a tooltip on hover.
#[function_component(StatusIndicator)]
pub fn status_indicator(props: &StatusIndicatorProps) -> Html {
    html! {
        <div role="group" class="group relative">
            <div class={circle_classes(props.is_success)} />
            <Tooltip>{props.children.clone()}</Tooltip>
        </div>
    }
}
