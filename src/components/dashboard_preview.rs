use yew::prelude::*;

const NAV_ITEMS: [&str; 6] = ["Home", "Customers", "Billing", "Schedules", "Invoices", "Products"];
const ROW_COUNT: usize = 5;

fn row_status(index: usize) -> &'static str {
    match index % 3 {
        0 => "Complete",
        1 => "Active",
        _ => "Draft",
    }
}

// Static product mockup shown under the hero.
#[function_component(DashboardPreview)]
pub fn dashboard_preview() -> Html {
    html! {
        <div class="dashboard-preview">
            <aside class="preview-sidebar">
                <div class="preview-brand">{"Brillance"}</div>
                <div class="preview-nav-title">{"Navigation"}</div>
                { for NAV_ITEMS.iter().map(|item| html! {
                    <div class={classes!("preview-nav-item", (*item == "Schedules").then(|| "active"))}>{*item}</div>
                })}
            </aside>
            <div class="preview-main">
                <h2>{"Schedules"}</h2>
                <div class="preview-table">
                    <div class="preview-row preview-head">
                        <div>{"Customer"}</div>
                        <div>{"Status"}</div>
                        <div>{"Products"}</div>
                        <div>{"Total"}</div>
                        <div>{"Start date"}</div>
                        <div>{"End date"}</div>
                    </div>
                    { for (0..ROW_COUNT).map(|i| html! {
                        <div class="preview-row" key={i}>
                            <div>{"Hypernise"}</div>
                            <div class={classes!("status", row_status(i).to_lowercase())}>{row_status(i)}</div>
                            <div>{"Platform access fee"}</div>
                            <div>{"$3,500.00"}</div>
                            <div>{format!("Nov {}, 2025", 11 + i)}</div>
                            <div>{"Dec 31, 2025"}</div>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
