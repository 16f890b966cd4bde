use leptos::prelude::*;

struct Operation {
    key: &'static str,
    label: &'static str,
    title: &'static str,
    body: &'static str,
}

const OPERATIONS: &[Operation] = &[
    Operation {
        key: "1",
        label: "Instant Transfers",
        title: "Transfer money to anyone, instantly! No fees, no BS.",
        body: "Send money to friends and family in seconds. Transfers between Bankist accounts are free and settle immediately, any day of the week.",
    },
    Operation {
        key: "2",
        label: "Instant Loans",
        title: "Buy a home or make your dreams come true, with instant loans.",
        body: "Apply from the app and get a decision on the spot. Rates are shown up front and you can repay early at no extra cost.",
    },
    Operation {
        key: "3",
        label: "Instant Closing",
        title: "No longer need your account? No problem! Close it instantly.",
        body: "Move your balance out and close the account in one step. We keep nothing longer than the law requires.",
    },
];

#[component]
pub fn Operations() -> impl IntoView {
    view! {
        <section class="section" id="section--2">
            <div class="section__title">
                <h2 class="section__description">"Operations"</h2>
                <h3 class="section__header">
                    "Everything as simple as possible, but no simpler."
                </h3>
            </div>

            <div class="operations">
                <div class="operations__tab-container">
                    {OPERATIONS
                        .iter()
                        .enumerate()
                        .map(|(i, op)| {
                            let class = if i == 0 {
                                format!("btn operations__tab operations__tab--{} operations__tab--active", op.key)
                            } else {
                                format!("btn operations__tab operations__tab--{}", op.key)
                            };
                            view! {
                                <button class=class data-tab=op.key>
                                    <span>{format!("0{}", op.key)}</span>
                                    {op.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {OPERATIONS
                    .iter()
                    .enumerate()
                    .map(|(i, op)| {
                        let class = if i == 0 {
                            format!("operations__content operations__content--{} operations__content--active", op.key)
                        } else {
                            format!("operations__content operations__content--{}", op.key)
                        };
                        view! {
                            <div class=class>
                                <h5 class="operations__header">{op.title}</h5>
                                <p>{op.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
