use landing_ui::palette::ColorToken;
use yew::prelude::*;

mod components;
mod constants;
mod test_cases;

use components::TestCaseGrid;
use test_cases::TestSuite;

#[function_component]
fn App() -> Html {
    let suites = use_memo(|_| TestSuite::parse(constants::TEST_CASES), ());

    match &*suites {
        Ok(suites) => html! {
            <main class="flex flex-col gap-8 p-8">
                {
                    suites.iter().map(|suite| html! {
                        <TestCaseGrid suite={suite.clone()} />
                    })
                    .collect::<Html>()
                }
            </main>
        },
        Err(err) => {
            log::error!("Unable to load test cases: {err}");
            let style = format!("color: {}", ColorToken::Error.css_var());
            html! { <div class="p-8" style={style}>{"Unable to load test cases"}</div> }
        }
    }
}

fn main() {
    let _ = console_log::init_with_level(constants::LOG_LEVEL);
    yew::Renderer::<App>::new().render();
}
