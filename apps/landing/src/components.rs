use landing_ui::StatusIndicator;
use yew::prelude::*;

use crate::test_cases::{TestCase, TestSuite};

#[derive(Properties, PartialEq)]
pub struct TestCaseDetailProps {
    pub case: TestCase,
}

#[function_component(TestCaseDetail)]
pub fn test_case_detail(props: &TestCaseDetailProps) -> Html {
    let case = &props.case;
    let rows = [
        ("Input", &case.input),
        ("Expected", &case.expected),
        ("Actual", &case.actual),
    ];

    html! {
        <dl class="grid grid-cols-[auto_1fr] gap-x-2 whitespace-nowrap">
            if let Some(name) = &case.name {
                <dt class="col-span-2 font-semibold">{name.clone()}</dt>
            }
            {
                rows.into_iter().map(|(label, value)| html! {
                    <>
                        <dt class="text-neutral-400">{label}</dt>
                        <dd>{value.clone()}</dd>
                    </>
                })
                .collect::<Html>()
            }
        </dl>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestCaseGridProps {
    pub suite: TestSuite,
}

/// One status dot per test case, grouped under the suite title.
#[function_component(TestCaseGrid)]
pub fn test_case_grid(props: &TestCaseGridProps) -> Html {
    let summary = props.suite.summary();

    html! {
        <section class="flex flex-col gap-2">
            <h2 class="text-lg font-semibold">
                {props.suite.title.clone()}
                <span class="ml-2 text-sm text-neutral-400">
                    {format!("{} / {}", summary.passed, summary.total())}
                </span>
            </h2>
            <div class="flex flex-row flex-wrap gap-1">
            {
                props.suite.cases.iter().map(|case| html! {
                    <StatusIndicator is_success={case.is_success()}>
                        <TestCaseDetail case={case.clone()} />
                    </StatusIndicator>
                })
                .collect::<Html>()
            }
            </div>
        </section>
    }
}
