use contracts::clients::{Client, ClientStatus};
use leptos::prelude::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, Input};
use crate::shared::data::samples;
use crate::shared::format::{format_currency, format_thousands};
use crate::shared::i18n::{t, use_language};

fn status_key(status: ClientStatus) -> &'static str {
    match status {
        ClientStatus::Active => "team.status.active",
        ClientStatus::Pending => "team.status.pending",
        ClientStatus::Inactive => "team.status.inactive",
    }
}

fn status_tone(status: ClientStatus) -> &'static str {
    match status {
        ClientStatus::Active => "success",
        ClientStatus::Pending => "warning",
        ClientStatus::Inactive => "muted",
    }
}

#[component]
fn ClientRow(client: Client) -> impl IntoView {
    let language = use_language();
    let status = client.status;

    view! {
        <tr>
            <td class="clients__name">{client.name.clone()}</td>
            <td>{client.industry.clone()}</td>
            <td>
                <Badge tone=status_tone(status)>
                    {move || t(language.current.get(), status_key(status))}
                </Badge>
            </td>
            <td class="clients__num">{format_currency(client.ad_spend)}</td>
            <td class="clients__num">{format_thousands(client.campaigns as i64)}</td>
            <td class="clients__num">{format!("{}x", client.roi)}</td>
        </tr>
    }
}

/// Agency client table with search plus the four summary cards above it.
#[component]
pub fn ClientListPage() -> impl IntoView {
    let language = use_language();
    let query = RwSignal::new(String::new());

    let all_clients = samples::clients();
    let total_spend: u32 = all_clients.iter().map(|c| c.ad_spend).sum();
    let active = all_clients
        .iter()
        .filter(|c| c.status == ClientStatus::Active)
        .count();
    let average_roi =
        all_clients.iter().map(|c| c.roi).sum::<f64>() / all_clients.len().max(1) as f64;
    let total = all_clients.len();

    let filtered = {
        let all_clients = all_clients.clone();
        Signal::derive(move || {
            let needle = query.get();
            all_clients
                .iter()
                .filter(|client| client.matches_query(&needle))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let summary_cards: [(&'static str, String, &'static str); 4] = [
        ("team.totalClients", total.to_string(), "team"),
        ("team.activeClients", active.to_string(), "check"),
        ("team.totalSpend", format_currency(total_spend), "chart"),
        ("team.averageRoi", format!("{:.1}x", average_roi), "reports"),
    ];

    view! {
        <div class="clients">
            <div class="clients__heading">
                <h2>{move || t(language.current.get(), "team.title")}</h2>
                <p>{move || t(language.current.get(), "team.description")}</p>
            </div>

            <div class="clients__stats">
                {summary_cards
                    .into_iter()
                    .map(|(label_key, value, icon_name)| {
                        let label = Signal::derive(move || {
                            t(language.current.get(), label_key).to_string()
                        });
                        view! {
                            <StatCard
                                label=label
                                icon_name=icon_name.to_string()
                                value=value
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="clients__search">
                <Input
                    placeholder=Signal::derive(move || {
                        t(language.current.get(), "team.search").to_string()
                    })
                    value=query
                    on_input=Callback::new(move |value| query.set(value))
                />
            </div>

            <table class="clients__table">
                <thead>
                    <tr>
                        <th>{move || t(language.current.get(), "team.col.client")}</th>
                        <th>{move || t(language.current.get(), "team.col.industry")}</th>
                        <th>{move || t(language.current.get(), "team.col.status")}</th>
                        <th>{move || t(language.current.get(), "team.col.adSpend")}</th>
                        <th>{move || t(language.current.get(), "team.col.campaigns")}</th>
                        <th>{move || t(language.current.get(), "team.col.roi")}</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || filtered.get()
                        key=|client| client.id
                        children=move |client| view! { <ClientRow client=client /> }
                    />
                </tbody>
            </table>
        </div>
    }
}
