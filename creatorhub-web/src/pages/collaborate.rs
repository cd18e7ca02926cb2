//! Collaboration hub, proposal dialog and collaboration history (wallet-gated)

use leptos::prelude::*;
use lib_core::collaboration::{
    filter_collaborations, CollaborationAction, StatusTab, EMPTY_MESSAGE, TERMINATE_WARNING,
};
use lib_core::forms::proposal::{
    FIELD_CATEGORY, FIELD_COMPENSATION, FIELD_DESCRIPTION, FIELD_DURATION, FIELD_PROJECT_NAME,
};
use lib_core::forms::{FieldErrors, ProposalCategory, ProposalForm};
use lib_core::store::{CollaborationStore, CreatorStore};
use lib_core::Toast;
use lib_utils::{format_date_range, format_long_date};
use shared::{Collaboration, CollaborationStatus, Project, SeekingCreator};

use crate::components::{ConfirmDialog, ConnectWalletPrompt, Modal, PageHeader, SelectField, TextField};
use crate::state::notifications::use_notifications;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::format_score;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Available,
    History,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum HubTab {
    Projects,
    Creators,
}

#[component]
pub fn CollaboratePage() -> impl IntoView {
    let wallet = use_wallet_context();
    let section = RwSignal::new(Section::Available);

    view! {
        <div class="container page">
            <PageHeader
                heading="Creator Collaborations"
                subheading="Discover, initiate, and manage collaborations with other creators and projects"
            />
            <Show
                when=move || wallet.is_connected()
                fallback=|| view! { <ConnectWalletPrompt message="Connect your wallet to access collaboration features"/> }
            >
                <div class="tabs tabs-wide">
                    <button
                        class="tab"
                        class:active=move || section.get() == Section::Available
                        on:click=move |_| section.set(Section::Available)
                    >
                        "Available Collaborations"
                    </button>
                    <button
                        class="tab"
                        class:active=move || section.get() == Section::History
                        on:click=move |_| section.set(Section::History)
                    >
                        "Collaboration History"
                    </button>
                </div>
                {move || match section.get() {
                    Section::Available => view! { <CollaborationHub/> }.into_any(),
                    Section::History => view! { <CollaborationHistory/> }.into_any(),
                }}
            </Show>
        </div>
    }
}

#[component]
fn CollaborationHub() -> impl IntoView {
    let tab = RwSignal::new(HubTab::Projects);
    let dialog_open = RwSignal::new(false);

    view! {
        <div class="hub-toolbar">
            <div class="tabs">
                <button
                    class="tab"
                    class:active=move || tab.get() == HubTab::Projects
                    on:click=move |_| tab.set(HubTab::Projects)
                >
                    "Projects"
                </button>
                <button
                    class="tab"
                    class:active=move || tab.get() == HubTab::Creators
                    on:click=move |_| tab.set(HubTab::Creators)
                >
                    "Creators"
                </button>
            </div>
            <button class="btn btn-primary" on:click=move |_| dialog_open.set(true)>
                "🤝 Create Proposal"
            </button>
        </div>

        <ProposalDialog open=dialog_open/>

        {move || match tab.get() {
            HubTab::Projects => view! {
                <div class="project-grid">
                    {CollaborationStore::projects()
                        .iter()
                        .map(|project| view! { <ProjectCard project=project.clone()/> })
                        .collect_view()}
                </div>
            }
            .into_any(),
            HubTab::Creators => view! {
                <div class="creator-grid">
                    {CreatorStore::seeking_collaborators()
                        .iter()
                        .map(|creator| view! { <SeekingCard creator=creator.clone()/> })
                        .collect_view()}
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="card project-card">
            <div class="project-image">
                <img src=project.image.clone() alt=project.title.clone()/>
                <div class="project-overlay">
                    <span class="badge badge-outline">{project.category.clone()}</span>
                    <h3>{project.title.clone()}</h3>
                </div>
            </div>
            <div class="card-body">
                <div class="partner-row">
                    <img class="avatar avatar-sm" src=project.owner.image.clone() alt=project.owner.name.clone()/>
                    <span class="small">{project.owner.name.clone()}</span>
                </div>
                <p class="muted small">{project.description.clone()}</p>
                <div class="project-terms small">
                    <span>{format!("⏱ {}", project.duration)}</span>
                    <span>{format!("✦ {}", project.compensation)}</span>
                </div>
            </div>
            <div class="card-footer">
                <span class="muted small">{format!("{} applicants", project.applicants)}</span>
                <button class="btn btn-primary btn-sm">"Apply"</button>
            </div>
        </div>
    }
}

#[component]
fn SeekingCard(creator: SeekingCreator) -> impl IntoView {
    view! {
        <div class="card seeking-card">
            <div class="card-header partner-row">
                <img class="avatar avatar-md" src=creator.image.clone() alt=creator.name.clone()/>
                <div>
                    <h3>{creator.name.clone()}</h3>
                    <p class="muted small">{creator.category.label()}</p>
                </div>
            </div>
            <div class="card-body">
                <p class="small">{creator.looking.clone()}</p>
                <div class="seeking-meta muted small">
                    <span>{format!("Score: {}", format_score(creator.score))}</span>
                    <span>{format!("{} collabs", creator.collaborations)}</span>
                </div>
            </div>
            <div class="card-footer">
                <button class="btn btn-outline full-width">"Connect"</button>
            </div>
        </div>
    }
}

#[component]
fn ProposalDialog(open: RwSignal<bool>) -> impl IntoView {
    let form = RwSignal::new(ProposalForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let notifications = use_notifications();

    let error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)));
    let categories = ProposalCategory::ALL.iter().map(|c| (c.slug(), c.label())).collect::<Vec<_>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ProposalForm::submit) {
            Ok(toast) => {
                notifications.push(toast);
                form.set(ProposalForm::default());
                errors.set(FieldErrors::new());
                open.set(false);
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    view! {
        <Modal
            open
            title="Create a Collaboration Proposal"
            description="Define the details of your collaboration project to find the right partners."
        >
            <form class="modal-form" on:submit=on_submit>
                <TextField
                    label="Project Name"
                    placeholder="e.g., NFT Collection Launch"
                    value=move || form.with(|f| f.project_name.clone())
                    on_input=move |v: String| form.update(|f| f.project_name = v)
                    error=error(FIELD_PROJECT_NAME)
                />
                <SelectField
                    label="Category"
                    options=categories.clone()
                    selected=move || form.with(|f| f.category.map(|c| c.slug()))
                    on_change=move |v: String| form.update(|f| f.category = v.parse().ok())
                    error=error(FIELD_CATEGORY)
                    placeholder="Select a category"
                />
                <TextField
                    label="Description"
                    placeholder="Describe your project and what kind of collaborators you're looking for..."
                    multiline=true
                    value=move || form.with(|f| f.description.clone())
                    on_input=move |v: String| form.update(|f| f.description = v)
                    error=error(FIELD_DESCRIPTION)
                />
                <div class="field-row">
                    <TextField
                        label="Duration"
                        placeholder="e.g., 2 months"
                        value=move || form.with(|f| f.duration.clone())
                        on_input=move |v: String| form.update(|f| f.duration = v)
                        error=error(FIELD_DURATION)
                    />
                    <TextField
                        label="Compensation"
                        placeholder="e.g., 5 SUI + Revenue Share"
                        value=move || form.with(|f| f.compensation.clone())
                        on_input=move |v: String| form.update(|f| f.compensation = v)
                        error=error(FIELD_COMPENSATION)
                    />
                </div>
                <div class="modal-actions">
                    <button type="submit" class="btn btn-primary">"Create Proposal"</button>
                </div>
            </form>
        </Modal>
    }
}

fn status_badge(status: CollaborationStatus) -> impl IntoView {
    let class = match status {
        CollaborationStatus::Active => "badge status-active",
        CollaborationStatus::Completed => "badge status-completed",
    };
    view! { <span class=class>{status.label()}</span> }
}

#[component]
fn CollaborationHistory() -> impl IntoView {
    let tab = RwSignal::new(StatusTab::default());
    let selected = RwSignal::new(None::<String>);
    let dialog_open = RwSignal::new(false);

    let visible = Memo::new(move |_| {
        filter_collaborations(CollaborationStore::history(), tab.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let open_details = move |id: String| {
        selected.set(Some(id));
        dialog_open.set(true);
    };

    view! {
        <div class="tabs">
            {StatusTab::ALL
                .into_iter()
                .map(|t| {
                    view! {
                        <button class="tab" class:active=move || tab.get() == t on:click=move |_| tab.set(t)>
                            {t.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>

        <Show
            when=move || visible.with(|v| !v.is_empty())
            fallback=|| view! { <div class="empty-state muted">{EMPTY_MESSAGE}</div> }
        >
            <div class="project-grid">
                <For
                    each=move || visible.get()
                    key=|c| c.id.clone()
                    children=move |collab| view! { <HistoryCard collab on_details=open_details/> }
                />
            </div>
        </Show>

        <CollaborationDialog selected open=dialog_open/>
    }
}

#[component]
fn HistoryCard(collab: Collaboration, #[prop(into)] on_details: Callback<String>) -> impl IntoView {
    let id = collab.id.clone();

    view! {
        <div class="card history-card">
            <div class="project-image">
                <img src=collab.nft_image.clone() alt=collab.title.clone()/>
                <div class="status-corner">{status_badge(collab.status)}</div>
            </div>
            <div class="card-header">
                <h3>{collab.title.clone()}</h3>
                <p class="muted small">{collab.category.clone()}</p>
            </div>
            <div class="card-body">
                <div class="partner-row">
                    <img class="avatar avatar-sm" src=collab.partner.image.clone() alt=collab.partner.name.clone()/>
                    <span class="small">{format!("with {}", collab.partner.name)}</span>
                </div>
                <p class="muted small clamp-2">{collab.description.clone()}</p>
                <p class="muted tiny">{format!("{}: {}", collab.status.end_prefix(), format_long_date(collab.end_date))}</p>
            </div>
            <div class="card-footer">
                <button class="btn btn-outline full-width" on:click=move |_| on_details.run(id.clone())>
                    "View Details"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CollaborationDialog(selected: RwSignal<Option<String>>, open: RwSignal<bool>) -> impl IntoView {
    let notifications = use_notifications();
    let confirm_open = RwSignal::new(false);

    let current = move || selected.get().and_then(|id| CollaborationStore::find(&id).ok());
    let title = Signal::derive(move || current().map(|c| c.title.clone()).unwrap_or_default());

    let run = move |action: CollaborationAction| {
        let Some(collab) = selected.get_untracked().and_then(|id| CollaborationStore::find(&id).ok()) else {
            return;
        };
        match action.perform(collab) {
            Ok(toast) => notifications.push(toast),
            Err(e) => {
                log::warn!("Collaboration action rejected: {}", e);
                notifications.push(Toast::destructive(e.user_message()));
            }
        }
        open.set(false);
    };

    view! {
        <Modal open title>
            {move || current().map(|collab| {
                let actions = CollaborationAction::available(collab.status);
                view! {
                    <div class="dialog-meta">
                        {status_badge(collab.status)}
                        <span class="muted small">{collab.category.clone()}</span>
                    </div>
                    <div class="dialog-image">
                        <img src=collab.nft_image.clone() alt=collab.title.clone()/>
                    </div>
                    <div class="partner-row">
                        <img class="avatar avatar-md" src=collab.partner.image.clone() alt=collab.partner.name.clone()/>
                        <div>
                            <h4>{format!("Collaboration with {}", collab.partner.name)}</h4>
                            <p class="muted small">{format_date_range(collab.start_date, collab.end_date)}</p>
                        </div>
                    </div>
                    <p class="small">{collab.description.clone()}</p>
                    <div class="note small">
                        <h4>"Collaboration NFT"</h4>
                        <p class="muted">
                            "This NFT serves as proof of your collaboration and contributes to your social credit score."
                        </p>
                    </div>
                    <div class="modal-actions">
                        {actions
                            .iter()
                            .map(|&action| match action {
                                CollaborationAction::Complete => view! {
                                    <button class="btn btn-outline" on:click=move |_| run(action)>"✔ Complete"</button>
                                }
                                .into_any(),
                                CollaborationAction::Terminate => view! {
                                    <button class="btn btn-destructive" on:click=move |_| confirm_open.set(true)>
                                        "Terminate"
                                    </button>
                                }
                                .into_any(),
                            })
                            .collect_view()}
                    </div>
                }
            })}
        </Modal>
        <ConfirmDialog
            open=confirm_open
            title="Are you sure?"
            message=TERMINATE_WARNING
            confirm_label="Confirm Termination"
            on_confirm=move |()| run(CollaborationAction::Terminate)
        />
    }
}
