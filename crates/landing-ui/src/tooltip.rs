use web_sys::{Event, HtmlElement};
use yew::prelude::*;

use crate::layout::correct_overflow;
use crate::observer::ResizeWatch;
use crate::viewport::use_viewport_width;

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    #[prop_or_default]
    pub children: Children,
}

/// Keeps hover transitions on the panel from leaking to the group around it.
pub fn stop_hover_propagation(event: &Event) {
    event.stop_propagation();
}

pub fn panel_classes() -> Classes {
    classes!(
        // Hidden until the surrounding `group` is hovered
        "hidden",
        "group-hover:flex",
        "flex-col",
        "justify-center",
        // Positioning
        "absolute",
        "translate-y-[10px]",
        "max-w-[calc(100vw-32px)]",
        "px-[10px]",
        "py-2",
        "rounded",
        "bg-black/75",
        "text-white",
        "text-sm",
        "z-50",
        "transition-all",
        "duration-300",
        "ease-in-out",
    )
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let node_ref = use_node_ref();
    let viewport = use_viewport_width();

    {
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |node_ref| {
                let watch = node_ref.cast::<HtmlElement>().and_then(|panel| {
                    let watch = ResizeWatch::observe(&panel, move |target| {
                        let Some(width) = viewport.current() else {
                            return;
                        };

                        if let Err(err) = correct_overflow(&target, width) {
                            log::warn!("unable to reposition tooltip: {err}");
                        }
                    });

                    watch
                        .map_err(|err| log::warn!("tooltip will not reposition: {err}"))
                        .ok()
                });

                move || drop(watch)
            },
            node_ref.clone(),
        );
    }

    let onmouseenter = Callback::from(|evt: MouseEvent| stop_hover_propagation(&evt));
    let onmouseleave = Callback::from(|evt: MouseEvent| stop_hover_propagation(&evt));

    html! {
        <div
            ref={node_ref}
            class={panel_classes()}
            {onmouseenter}
            {onmouseleave}
        >
            {props.children.clone()}
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::panel_classes;

    #[test]
    fn test_hidden_until_group_hover() {
        let classes = panel_classes();
        assert!(classes.contains("hidden"));
        assert!(classes.contains("group-hover:flex"));
        assert!(!classes.contains("flex"));
    }

    #[test]
    fn test_panel_floats() {
        let classes = panel_classes();
        assert!(classes.contains("absolute"));
        assert!(classes.contains("max-w-[calc(100vw-32px)]"));
    }
}
