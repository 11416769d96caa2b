//! Tab strip for switching between mutually exclusive panes.
//!
//! The component only reports the selected index; associating content with
//! an index is the parent's responsibility.

mod selection;

pub use selection::{
    activation_target, clamp_index, step, ActivationMode, Direction, Orientation, TabsKind,
};

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;

use crate::theme::use_theme;

/// Static descriptor for one selectable tab.
#[derive(Clone, Default)]
pub struct TabDefinition {
    pub label: String,
    pub sublabel: Option<String>,
    /// Opaque renderable shown before the label, e.g. an icon.
    pub start_icon: Option<ViewFn>,
    pub disabled: bool,
}

impl TabDefinition {
    pub fn new(label: impl Into<String>) -> Self {
        TabDefinition {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }

    pub fn with_start_icon(mut self, icon: impl Into<ViewFn>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Controlled tab strip: the parent owns the selected index and receives a
/// notification with the new index on every valid activation.
///
/// Clicking the already-active tab and clicking a disabled tab both fire
/// nothing. Arrow keys move focus along the orientation axis, skipping
/// disabled tabs and wrapping at the ends; in [`ActivationMode::Auto`] the
/// focus move itself selects, in [`ActivationMode::Manual`] selection waits
/// for Enter or Space.
#[component]
pub fn Tabs(
    /// Tab descriptors, in render order
    tabs: Vec<TabDefinition>,
    /// Currently selected index, owned by the parent
    #[prop(into)]
    selected: Signal<usize>,
    /// Fired with the new index on every valid activation
    on_selected: Callback<usize>,
    /// Layout axis; also picks the arrow keys used for navigation
    #[prop(optional)]
    orientation: Orientation,
    /// Visual variant
    #[prop(optional)]
    kind: TabsKind,
    /// Keyboard activation policy
    #[prop(optional)]
    activation_mode: ActivationMode,
    /// Additional CSS classes for the root element
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Inline style for the root element
    #[prop(optional, into)]
    style: MaybeProp<String>,
) -> impl IntoView {
    use_theme();

    let count = tabs.len();
    let disabled_flags: Arc<[bool]> = tabs.iter().map(|t| t.disabled).collect();
    let refs: Vec<NodeRef<html::Button>> = (0..count).map(|_| NodeRef::new()).collect();

    // Externally supplied selection is rendered clamped, so a stale
    // out-of-range index still shows exactly one active tab.
    let active_index = Memo::new(move |_| clamp_index(count, selected.get()));

    let focused = RwSignal::new(active_index.get_untracked());

    // Follow externally driven selection changes with the roving focus.
    Effect::new(move |_| {
        focused.set(active_index.get());
    });

    let orientation_class = match orientation {
        Orientation::Horizontal => "tabs--horizontal",
        Orientation::Vertical => "tabs--vertical",
    };
    let kind_class = match kind {
        TabsKind::Default => "",
        TabsKind::Borderless => "tabs--borderless",
        TabsKind::Pill => "tabs--pill",
    };
    let root_class = move || {
        format!(
            "tabs {} {} {}",
            orientation_class,
            kind_class,
            class.get().unwrap_or_default()
        )
    };
    let root_style = move || style.get().unwrap_or_default();
    let orientation_attr = match orientation {
        Orientation::Horizontal => "horizontal",
        Orientation::Vertical => "vertical",
    };

    let keys_disabled = disabled_flags.clone();
    let keys_refs = refs.clone();
    let handle_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if let Some(direction) = Direction::from_key(orientation, &key) {
            ev.prevent_default();
            if let Some(next) = step(&keys_disabled, focused.get(), direction) {
                focused.set(next);
                if let Some(button) = keys_refs[next].get() {
                    let _ = button.focus();
                }
                if activation_mode == ActivationMode::Auto {
                    if let Some(next) = activation_target(&keys_disabled, selected.get(), next) {
                        on_selected.run(next);
                    }
                }
            }
        } else if matches!(key.as_str(), "Enter" | " ") {
            ev.prevent_default();
            if let Some(next) = activation_target(&keys_disabled, selected.get(), focused.get()) {
                on_selected.run(next);
            }
        }
    };

    view! {
        <div class=root_class style=root_style>
            <ul class="tabs__list" role="tablist" aria-orientation=orientation_attr on:keydown=handle_keydown>
                {tabs.into_iter().enumerate().map(|(index, tab)| {
                    let TabDefinition { label, sublabel, start_icon, disabled } = tab;
                    let node_ref = refs[index];
                    let click_disabled = disabled_flags.clone();
                    let is_active = move || active_index.get() == index;
                    let tab_class = move || {
                        let mut cls = "tabs__tab".to_string();
                        if is_active() {
                            cls.push_str(" tabs__tab--active");
                        }
                        if disabled {
                            cls.push_str(" tabs__tab--disabled");
                        }
                        cls
                    };
                    view! {
                        <li class="tabs__item" role="presentation">
                            <button
                                node_ref=node_ref
                                class=tab_class
                                role="tab"
                                disabled=disabled
                                aria-selected=move || is_active().to_string()
                                tabindex=move || if focused.get() == index { "0" } else { "-1" }
                                on:click=move |_| {
                                    if let Some(next) = activation_target(&click_disabled, selected.get(), index) {
                                        focused.set(next);
                                        on_selected.run(next);
                                    }
                                }
                            >
                                {start_icon.map(|icon| view! {
                                    <span class="tabs__icon">{icon.run()}</span>
                                })}
                                <span class="tabs__label">{label}</span>
                                {sublabel.map(|s| view! {
                                    <span class="tabs__sublabel">{s}</span>
                                })}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Uncontrolled tab strip: owns its selected index, starting from
/// `default_index` (0 by convention), with an optional change notification.
#[component]
pub fn UncontrolledTabs(
    /// Tab descriptors, in render order
    tabs: Vec<TabDefinition>,
    /// Initially selected index
    #[prop(optional)]
    default_index: usize,
    /// Fired with the new index on every valid activation
    #[prop(optional)]
    on_selected: Option<Callback<usize>>,
    /// Layout axis; also picks the arrow keys used for navigation
    #[prop(optional)]
    orientation: Orientation,
    /// Visual variant
    #[prop(optional)]
    kind: TabsKind,
    /// Keyboard activation policy
    #[prop(optional)]
    activation_mode: ActivationMode,
    /// Additional CSS classes for the root element
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Inline style for the root element
    #[prop(optional, into)]
    style: MaybeProp<String>,
) -> impl IntoView {
    let selected = RwSignal::new(clamp_index(tabs.len(), default_index));
    let handle_selected = move |index: usize| {
        selected.set(index);
        if let Some(callback) = on_selected {
            callback.run(index);
        }
    };

    view! {
        <Tabs
            tabs=tabs
            selected=selected
            on_selected=Callback::new(handle_selected)
            orientation=orientation
            kind=kind
            activation_mode=activation_mode
            class=class
            style=style
        />
    }
}

/// Controlled tab strip laid out horizontally (left/right arrow keys).
#[component]
pub fn HorizontalTabs(
    tabs: Vec<TabDefinition>,
    #[prop(into)] selected: Signal<usize>,
    on_selected: Callback<usize>,
    #[prop(optional)] kind: TabsKind,
    #[prop(optional)] activation_mode: ActivationMode,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] style: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <Tabs
            tabs=tabs
            selected=selected
            on_selected=on_selected
            orientation=Orientation::Horizontal
            kind=kind
            activation_mode=activation_mode
            class=class
            style=style
        />
    }
}

/// Controlled tab strip laid out vertically (up/down arrow keys).
#[component]
pub fn VerticalTabs(
    tabs: Vec<TabDefinition>,
    #[prop(into)] selected: Signal<usize>,
    on_selected: Callback<usize>,
    #[prop(optional)] kind: TabsKind,
    #[prop(optional)] activation_mode: ActivationMode,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] style: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <Tabs
            tabs=tabs
            selected=selected
            on_selected=on_selected
            orientation=Orientation::Vertical
            kind=kind
            activation_mode=activation_mode
            class=class
            style=style
        />
    }
}
