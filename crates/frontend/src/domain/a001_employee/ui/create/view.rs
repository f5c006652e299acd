use super::state::{ComboField, FormAction, TextField};
use super::view_model::EmployeeCreateViewModel;
use crate::shared::components::ui::{Button, FieldErrorText, Input, Textarea};
use crate::shared::components::{Breadcrumb, Combobox, Crumb, ErrorBanner, SuccessBanner};
use crate::shared::icons::icon;
use contracts::domain::a001_employee::metadata::{IMAGE, INSURANCES};
use contracts::domain::common::Choice;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

#[component]
fn ComboInput(vm: EmployeeCreateViewModel, field: ComboField) -> impl IntoView {
    let meta = field.metadata();
    let state = vm.state;

    view! {
        <Combobox
            label=meta.label()
            id=meta.name
            options=Signal::derive(move || state.with(|s| s.options(field)))
            query=Signal::derive(move || state.with(|s| s.combo(field).query))
            selected=Signal::derive(move || state.with(|s| s.combo(field).selected))
            on_query=Callback::new(move |q: String| vm.dispatch(FormAction::SetQuery(field, q)))
            on_select=Callback::new(move |c: Choice| vm.select(field, c))
            error=vm.field_error(meta.name)
        />
    }
}

#[component]
fn TextInput(vm: EmployeeCreateViewModel, field: TextField) -> impl IntoView {
    let meta = field.metadata();
    let mode = if field.is_numeric() { "numeric" } else { "text" };

    view! {
        <Input
            label=meta.label()
            id=meta.name
            value=vm.text(field)
            on_input=vm.set_text(field)
            placeholder=meta.ui.placeholder.unwrap_or_default()
            input_mode=mode
            error=vm.field_error(meta.name)
        />
    }
}

#[component]
fn TextBlock(vm: EmployeeCreateViewModel, field: TextField) -> impl IntoView {
    let meta = field.metadata();

    view! {
        <Textarea
            label=meta.label()
            id=meta.name
            value=vm.text(field)
            on_input=vm.set_text(field)
            error=vm.field_error(meta.name)
        />
    }
}

/// Photo picker with preview
#[component]
fn PhotoField(vm: EmployeeCreateViewModel) -> impl IntoView {
    let state = vm.state;
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();
    let error = vm.field_error(IMAGE.name);

    // The file input keeps its selection after a successful store unless reset.
    Effect::new(move |_| {
        if state.with(|s| s.draft.image.is_none()) {
            if let Some(input) = file_input.get() {
                input.set_value("");
            }
        }
    });

    view! {
        <div class="form__group photo">
            <span class="form__label">{IMAGE.label()}</span>
            <div class="photo__row">
                {move || match vm.photo_url.get() {
                    Some(url) => view! {
                        <img class="photo__preview" src=url alt="Photo preview" />
                    }
                    .into_any(),
                    None => view! {
                        <span class="photo__placeholder">{icon("user")}</span>
                    }
                    .into_any(),
                }}
                <label class="button button--secondary photo__change" for=IMAGE.name>
                    "Change"
                </label>
                <input
                    node_ref=file_input
                    id=IMAGE.name
                    name=IMAGE.name
                    class="sr-only"
                    type="file"
                    accept=".jpg,.jpeg"
                    on:change=move |ev| {
                        let input: HtmlInputElement = event_target(&ev);
                        let file = input.files().and_then(|files| files.get(0));
                        vm.set_photo(file);
                    }
                />
                <span class="photo__name">
                    {move || state.with(|s| s.draft.image.as_ref().map(|i| i.file_name.clone()))}
                </span>
            </div>
            <FieldErrorText error=error />
        </div>
    }
}

/// Insurance slots with add and remove controls
#[component]
fn InsuranceSection(vm: EmployeeCreateViewModel) -> impl IntoView {
    let state = vm.state;
    let options = Signal::derive(move || state.with(|s| s.insurance_options()));
    let slot_keys = move || {
        state.with(|s| s.insurance.slots().iter().map(|slot| slot.key).collect::<Vec<_>>())
    };

    view! {
        <section class="form__section">
            <h3 class="form__section-title">"Insurance"</h3>
            <Show when=move || state.with(|s| s.insurance.is_empty())>
                <p class="form__empty">"No Insurance"</p>
            </Show>
            <div class="insurance__list">
                <For
                    each=slot_keys
                    key=|key| *key
                    children=move |key| {
                        let slot = move || state.with(|s| s.insurance.by_key(key).cloned());
                        let slot_class = move || {
                            let slot_state = slot().map(|s| s.state().as_str()).unwrap_or("empty");
                            format!("insurance__slot insurance__slot--{}", slot_state)
                        };
                        view! {
                            <div class=slot_class>
                                <Combobox
                                    id=format!("insurance-{}", key)
                                    options=options
                                    query=Signal::derive(move || {
                                        slot().map(|s| s.query).unwrap_or_default()
                                    })
                                    selected=Signal::derive(move || slot().and_then(|s| s.selection))
                                    on_query=Callback::new(move |q: String| {
                                        vm.with_slot(key, move |i| FormAction::SetInsuranceQuery(i, q))
                                    })
                                    on_select=Callback::new(move |c: Choice| {
                                        vm.with_slot(key, move |i| FormAction::SelectInsurance(i, c))
                                    })
                                    on_remove=Callback::new(move |_: ()| {
                                        vm.with_slot(key, FormAction::RemoveInsurance)
                                    })
                                />
                            </div>
                        }
                    }
                />
            </div>
            <FieldErrorText error=vm.field_error(INSURANCES.name) />
            <Button
                variant="secondary"
                on_click=Callback::new(move |_| vm.dispatch(FormAction::AppendInsurance))
            >
                "Add Insurance"
            </Button>
        </section>
    }
}

#[component]
pub fn EmployeeCreate() -> impl IntoView {
    let vm = EmployeeCreateViewModel::new();
    vm.load_reference_data();
    on_cleanup(move || vm.release_preview());

    let state = vm.state;
    let errors = Signal::derive(move || state.with(|s| s.errors.clone()));
    let status = Signal::derive(move || state.with(|s| s.visible_status()));
    let submitting = Signal::derive(move || Some(state.with(|s| s.submitting)));

    let crumbs = vec![
        Crumb {
            name: "Employee",
            href: Some("/employee"),
        },
        Crumb {
            name: "Create",
            href: None,
        },
    ];

    view! {
        <div class="page employee-create">
            <Breadcrumb pages=crumbs />
            <ErrorBanner errors=errors />
            <SuccessBanner
                message=status
                on_dismiss=Callback::new(move |_| vm.dispatch(FormAction::DismissStatus))
            />

            <form
                class="form"
                novalidate=true
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                }
            >
                <section class="form__section">
                    <h2 class="form__title">"Create new employee"</h2>
                    <PhotoField vm=vm />
                    <div class="form__grid">
                        <ComboInput vm=vm field=ComboField::SubDepartement />
                        <ComboInput vm=vm field=ComboField::WageSystem />
                        <ComboInput vm=vm field=ComboField::Position />
                        <ComboInput vm=vm field=ComboField::Type />
                        <ComboInput vm=vm field=ComboField::Grade />
                        <TextInput vm=vm field=TextField::Name />
                        <TextInput vm=vm field=TextField::SignIn />
                        <TextInput vm=vm field=TextField::Leave />
                        <TextInput vm=vm field=TextField::Wages />
                    </div>
                    <TextBlock vm=vm field=TextField::ExitStatement />
                </section>

                <section class="form__section">
                    <h3 class="form__section-title">"Personal Information"</h3>
                    <div class="form__grid">
                        <TextInput vm=vm field=TextField::PlaceOfBirth />
                        <TextInput vm=vm field=TextField::DateOfBirth />
                    </div>
                    <TextBlock vm=vm field=TextField::Address />
                    <div class="form__grid">
                        <TextInput vm=vm field=TextField::City />
                        <TextInput vm=vm field=TextField::PostalCode />
                        <TextInput vm=vm field=TextField::Phone />
                        <ComboInput vm=vm field=ComboField::Gender />
                        <ComboInput vm=vm field=ComboField::BloodGroup />
                        <TextInput vm=vm field=TextField::Weight />
                        <TextInput vm=vm field=TextField::Height />
                        <TextInput vm=vm field=TextField::IdCardNumber />
                        <TextInput vm=vm field=TextField::FamilyStatus />
                        <TextInput vm=vm field=TextField::Parent />
                        <TextInput vm=vm field=TextField::HusbandAndWife />
                        <ComboInput vm=vm field=ComboField::Religion />
                        <ComboInput vm=vm field=ComboField::Education />
                        <ComboInput vm=vm field=ComboField::Major />
                    </div>
                </section>

                <InsuranceSection vm=vm />

                <div class="form__actions">
                    <Button button_type="submit" disabled=submitting>
                        {move || if state.with(|s| s.submitting) { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
