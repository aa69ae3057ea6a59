use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use log::info;

use crate::components::booking_button::BookingButton;
use crate::components::pie_chart::CostPieChart;
use crate::config;
use crate::estimator::catalog::{preset_by_name, template_by_name};
use crate::estimator::{
    build_cost_breakdown, compute_aggregates, download_csv, export_csv, format_money, parse_rate_input,
    Currency, Duration, Estimator, RoleId, RoleUpdate, Seniority, WorkModel, PRESETS, ROLE_TEMPLATES,
};

pub enum PricingMsg {
    SetDuration(Duration),
    SetWorkModel(WorkModel),
    SetCurrency(Currency),
    SetComparison(bool),
    ApplyPreset(&'static str),
    AddTemplate(&'static str),
    ShowCustomForm(bool),
    SetCustomName(String),
    SubmitCustom,
    SetSeniority(RoleId, Seniority),
    StepQuantity(RoleId, i32),
    SetRate(RoleId, String),
    Remove(RoleId),
    ExportCsv,
}

pub struct PricingSection {
    estimator: Estimator,
    duration: Duration,
    work_model: WorkModel,
    currency: Currency,
    show_us_comparison: bool,
    custom_role_name: String,
    show_custom_form: bool,
}

impl Component for PricingSection {
    type Message = PricingMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            estimator: Estimator::new(),
            duration: Duration::default(),
            work_model: WorkModel::default(),
            currency: Currency::default(),
            show_us_comparison: true,
            custom_role_name: String::new(),
            show_custom_form: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PricingMsg::SetDuration(duration) => {
                self.duration = duration;
                true
            }
            PricingMsg::SetWorkModel(model) => {
                self.work_model = model;
                true
            }
            PricingMsg::SetCurrency(currency) => {
                self.currency = currency;
                true
            }
            PricingMsg::SetComparison(show) => {
                self.show_us_comparison = show;
                true
            }
            PricingMsg::ApplyPreset(name) => match preset_by_name(name) {
                Some(preset) => {
                    self.estimator.apply_preset(preset);
                    true
                }
                None => false,
            },
            PricingMsg::AddTemplate(name) => match template_by_name(name) {
                Some(template) => {
                    self.estimator.add_role(template);
                    true
                }
                None => false,
            },
            PricingMsg::ShowCustomForm(show) => {
                self.show_custom_form = show;
                if !show {
                    self.custom_role_name.clear();
                }
                true
            }
            PricingMsg::SetCustomName(name) => {
                self.custom_role_name = name;
                true
            }
            PricingMsg::SubmitCustom => {
                if self.estimator.add_custom_role(&self.custom_role_name).is_none() {
                    return false;
                }
                self.custom_role_name.clear();
                self.show_custom_form = false;
                true
            }
            PricingMsg::SetSeniority(id, seniority) => {
                self.estimator.update_role(&id, RoleUpdate::seniority(seniority))
            }
            PricingMsg::StepQuantity(id, delta) => self.estimator.step_quantity(&id, delta),
            PricingMsg::SetRate(id, raw) => {
                self.estimator.update_role(&id, RoleUpdate::monthly_rate(parse_rate_input(&raw)))
            }
            PricingMsg::Remove(id) => self.estimator.remove_role(&id),
            PricingMsg::ExportCsv => {
                let aggregates = compute_aggregates(self.estimator.roles(), self.duration);
                let csv = export_csv(self.estimator.roles(), &aggregates, self.duration);
                match download_csv(config::ESTIMATE_FILE_NAME, &csv) {
                    Ok(()) => info!("Exported estimate with {} roles", self.estimator.roles().len()),
                    Err(e) => gloo_console::error!("CSV export failed:", e.to_string()),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let roles = self.estimator.roles();
        let aggregates = compute_aggregates(roles, self.duration);
        let breakdown = build_cost_breakdown(roles);
        let months = self.duration.months();

        let on_work_model = link.batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            WorkModel::from_label(&select.value()).map(PricingMsg::SetWorkModel)
        });
        let on_currency = link.batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Currency::from_label(&select.value()).map(PricingMsg::SetCurrency)
        });
        let on_comparison = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            PricingMsg::SetComparison(input.checked())
        });
        let on_custom_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            PricingMsg::SetCustomName(input.value())
        });
        let on_custom_key = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(PricingMsg::SubmitCustom)
        });

        html! {
            <div id="pricing-section" class="pricing-section">
                <div class="pricing-header">
                    <span class="badge">{"Plans & Pricing"}</span>
                    <h2>{"Transparent Pricing & Team Estimator"}</h2>
                    <p>{"Start with a free strategy session or build your custom team estimate with transparent, editable pricing."}</p>
                </div>

                <div class="consult-card">
                    <div class="consult-copy">
                        <span class="free-badge">{"Free"}</span>
                        <h3>{"Free Strategy & Consultation"}</h3>
                        <p>{"30 minute planning session, hiring strategy, roadmap, and delivery plan at no charge."}</p>
                    </div>
                    <div class="consult-cta">
                        <BookingButton label="Book Free Consultation" />
                        <p class="consult-note">{"NDA available · No obligation"}</p>
                    </div>
                </div>

                <div class="estimator-card">
                    <h3>{"Team Cost Estimator"}</h3>
                    <p class="estimator-intro">{"Configure roles, seniority, and duration to view instant, transparent cost estimates."}</p>

                    <div class="quick-controls">
                        <div class="control">
                            <label>{"Duration"}</label>
                            <div class="duration-buttons">
                                { for Duration::ALL.into_iter().map(|d| html! {
                                    <button
                                        class={classes!("duration-button", (d == self.duration).then(|| "active"))}
                                        onclick={link.callback(move |_| PricingMsg::SetDuration(d))}
                                    >
                                        {d.short_label()}
                                    </button>
                                })}
                            </div>
                        </div>
                        <div class="control">
                            <label for="work-model">{"Work model"}</label>
                            <select id="work-model" onchange={on_work_model}>
                                { for WorkModel::ALL.into_iter().map(|m| html! {
                                    <option value={m.as_str()} selected={m == self.work_model}>{m.as_str()}</option>
                                })}
                            </select>
                        </div>
                        <div class="control">
                            <label for="currency">{"Currency"}</label>
                            <select id="currency" onchange={on_currency}>
                                { for Currency::ALL.into_iter().map(|c| html! {
                                    <option value={c.as_str()} selected={c == self.currency}>{c.as_str()}</option>
                                })}
                            </select>
                        </div>
                        <div class="control">
                            <label>{"Presets"}</label>
                            <div class="preset-buttons">
                                { for PRESETS.iter().map(|preset| html! {
                                    <button class="preset-button" onclick={link.callback(move |_| PricingMsg::ApplyPreset(preset.name))}>
                                        {preset.name}
                                    </button>
                                })}
                            </div>
                        </div>
                    </div>

                    if !self.estimator.is_empty() {
                        <div class="team-chips">
                            { for roles.iter().map(|role| {
                                let id = role.id.clone();
                                html! {
                                    <span class="team-chip" key={role.id.as_str()}>
                                        {format!("{}x {} ({})", role.quantity, role.name, role.seniority)}
                                        <button
                                            class="chip-remove"
                                            aria-label={format!("Remove {}", role.name)}
                                            onclick={link.callback(move |_| PricingMsg::Remove(id.clone()))}
                                        >
                                            {"×"}
                                        </button>
                                    </span>
                                }
                            })}
                        </div>
                    }

                    <div class="estimator-body">
                        <div class="role-builder">
                            <h4>{"Add roles"}</h4>
                            <div class="template-grid">
                                { for ROLE_TEMPLATES.iter().map(|template| html! {
                                    <button class="template-button" onclick={link.callback(move |_| PricingMsg::AddTemplate(template.name))}>
                                        <span class="template-name">{template.name}</span>
                                        <span class="template-plus">{"+"}</span>
                                    </button>
                                })}
                            </div>

                            if self.show_custom_form {
                                <div class="custom-role-form">
                                    <input
                                        type="text"
                                        placeholder="Role name"
                                        value={self.custom_role_name.clone()}
                                        oninput={on_custom_input}
                                        onkeydown={on_custom_key}
                                    />
                                    <button class="add-button" onclick={link.callback(|_| PricingMsg::SubmitCustom)}>{"Add"}</button>
                                    <button class="cancel-button" onclick={link.callback(|_| PricingMsg::ShowCustomForm(false))}>{"Cancel"}</button>
                                </div>
                            } else {
                                <button class="custom-role-toggle" onclick={link.callback(|_| PricingMsg::ShowCustomForm(true))}>
                                    {"+ Add custom role"}
                                </button>
                            }

                            <div class="role-editors">
                                { for roles.iter().map(|role| {
                                    let seniority_id = role.id.clone();
                                    let minus_id = role.id.clone();
                                    let plus_id = role.id.clone();
                                    let rate_id = role.id.clone();
                                    let on_seniority = link.batch_callback(move |e: Event| {
                                        let select: HtmlSelectElement = e.target_unchecked_into();
                                        Seniority::from_label(&select.value())
                                            .map(|s| PricingMsg::SetSeniority(seniority_id.clone(), s))
                                    });
                                    let on_rate = link.callback(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        PricingMsg::SetRate(rate_id.clone(), input.value())
                                    });
                                    html! {
                                        <div class="role-editor" key={role.id.as_str()}>
                                            <h5>{&role.name}</h5>
                                            <select onchange={on_seniority}>
                                                { for Seniority::ALL.into_iter().map(|s| html! {
                                                    <option value={s.as_str()} selected={s == role.seniority}>{s.as_str()}</option>
                                                })}
                                            </select>
                                            <div class="quantity-stepper">
                                                <button onclick={link.callback(move |_| PricingMsg::StepQuantity(minus_id.clone(), -1))}>{"−"}</button>
                                                <span>{role.quantity}</span>
                                                <button onclick={link.callback(move |_| PricingMsg::StepQuantity(plus_id.clone(), 1))}>{"+"}</button>
                                            </div>
                                            <div class="rate-input">
                                                <span>{"$"}</span>
                                                <input
                                                    type="number"
                                                    min="0"
                                                    value={role.monthly_rate.to_string()}
                                                    oninput={on_rate}
                                                />
                                                <span>{"/mo"}</span>
                                            </div>
                                        </div>
                                    }
                                })}
                            </div>
                        </div>

                        <div class="summary-panel">
                            <div class="summary-row">
                                <span>{"Monthly cost"}</span>
                                <span class="summary-amount">{format_money(aggregates.monthly_cost)}</span>
                            </div>
                            <div class="summary-row">
                                <span>
                                    {format!("Total for {} months:", months)}
                                    <small>{format!("{} × {}/mo", months, format_money(aggregates.monthly_cost))}</small>
                                </span>
                                <span class="summary-amount">{format_money(aggregates.total_cost)}</span>
                            </div>
                            <p class="summary-meta">
                                {format!("{} · prices shown in {}", self.work_model.as_str(), self.currency.as_str())}
                            </p>

                            if self.show_us_comparison && aggregates.us_equivalent_monthly_cost > 0 {
                                <div class="us-comparison">
                                    <div class="summary-row">
                                        <span>{"US equivalent"}</span>
                                        <span class="strike">{format_money(aggregates.us_equivalent_total_cost)}</span>
                                    </div>
                                    <div class="summary-row">
                                        <span>{"You save"}</span>
                                        <span class="savings">{format!("~{}%", aggregates.savings_rounded())}</span>
                                    </div>
                                    <div class="savings-bar">
                                        <div
                                            class="savings-fill"
                                            style={format!("width: {:.1}%;", aggregates.savings_percent.clamp(0.0, 100.0))}
                                        ></div>
                                    </div>
                                    <p class="savings-note">
                                        {format!("That's {} in savings", format_money(aggregates.absolute_savings()))}
                                    </p>
                                </div>
                            }

                            <label class="comparison-toggle">
                                <input type="checkbox" checked={self.show_us_comparison} onchange={on_comparison} />
                                {"Compare with US rates"}
                            </label>

                            if !breakdown.is_empty() {
                                <CostPieChart slices={breakdown} />
                            }

                            <div class="export-actions">
                                <button class="export-button" onclick={link.callback(|_| PricingMsg::ExportCsv)}>
                                    {"Export CSV"}
                                </button>
                                <BookingButton label="Book a Free Consultancy" />
                            </div>
                        </div>
                    </div>
                </div>

                <style>
                    {r#"
                    .pricing-section {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                        padding: 4rem 1.5rem;
                        color: #37322F;
                    }

                    .pricing-header {
                        max-width: 586px;
                        text-align: center;
                    }

                    .pricing-header h2 {
                        font-size: 2.5rem;
                        color: #49423D;
                        margin: 1rem 0;
                    }

                    .badge, .free-badge {
                        display: inline-block;
                        padding: 6px 14px;
                        border-radius: 90px;
                        font-size: 0.75rem;
                        border: 1px solid rgba(2, 6, 23, 0.08);
                        background: #fff;
                    }

                    .free-badge {
                        background: #FF8000;
                        color: #fff;
                        text-transform: uppercase;
                    }

                    .consult-card, .estimator-card {
                        width: 100%;
                        max-width: 1120px;
                        border: 1px solid rgba(50, 45, 43, 0.12);
                        border-radius: 8px;
                        padding: 2rem;
                        background: #fff;
                    }

                    .consult-card {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .estimator-card {
                        background: #FAFAFA;
                    }

                    .quick-controls {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        margin: 1.5rem 0;
                    }

                    .control {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .duration-button, .preset-button, .template-button {
                        padding: 0.5rem 1rem;
                        border-radius: 8px;
                        border: 1px solid #E0DEDB;
                        background: #fff;
                        cursor: pointer;
                    }

                    .duration-button.active {
                        background: #37322F;
                        color: #fff;
                    }

                    .team-chips {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }

                    .team-chip {
                        padding: 0.25rem 0.75rem;
                        border-radius: 99px;
                        background: #F0EDEA;
                        font-size: 0.8rem;
                    }

                    .estimator-body {
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 2rem;
                    }

                    .template-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
                        gap: 0.5rem;
                    }

                    .role-editor {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem 0;
                        border-bottom: 1px solid #E0DEDB;
                    }

                    .summary-panel {
                        background: #37322F;
                        color: #FBFAF9;
                        border-radius: 8px;
                        padding: 1.5rem;
                    }

                    .summary-row {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 0.75rem;
                    }

                    .summary-amount {
                        font-size: 1.75rem;
                        font-weight: 700;
                    }

                    .strike {
                        text-decoration: line-through;
                        color: #B2AEA9;
                    }

                    .savings {
                        color: #FF8000;
                        font-weight: 700;
                    }

                    .savings-bar {
                        height: 6px;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 3px;
                    }

                    .savings-fill {
                        height: 100%;
                        background: #FF8000;
                        border-radius: 3px;
                    }

                    .cost-legend {
                        list-style: none;
                        padding: 0;
                        font-size: 0.8rem;
                    }

                    .legend-swatch {
                        display: inline-block;
                        width: 10px;
                        height: 10px;
                        margin-right: 6px;
                        border-radius: 2px;
                    }

                    @media (max-width: 900px) {
                        .estimator-body {
                            grid-template-columns: 1fr;
                        }
                    }
                    "#}
                </style>
            </div>
        }
    }
}
