use std::collections::HashMap;

use yew::prelude::*;

/// Icono SVG de un solo path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDef {
    pub name: &'static str,
    pub view_box: &'static str,
    pub path: &'static str,
}

pub const DOG: IconDef = IconDef {
    name: "dog",
    view_box: "0 0 24 24",
    path: "M3.5 10a2 2.5 0 1 0 4 0a2 2.5 0 1 0-4 0z\
           M7.5 5.5a2 2.5 0 1 0 4 0a2 2.5 0 1 0-4 0z\
           M12.5 5.5a2 2.5 0 1 0 4 0a2 2.5 0 1 0-4 0z\
           M16.5 10a2 2.5 0 1 0 4 0a2 2.5 0 1 0-4 0z\
           M12 12c-3 0-5.5 3.2-5.5 5.6 0 1.6 1.2 2.4 2.7 2.4 1.1 0 1.8-.5 2.8-.5s1.7.5 2.8.5\
           c1.5 0 2.7-.8 2.7-2.4 0-2.4-2.5-5.6-5.5-5.6z",
};

/// Iconos que puede dibujar `Icon`; `App` los provee como contexto
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconRegistry {
    icons: HashMap<&'static str, IconDef>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, icon: IconDef) -> &mut Self {
        self.icons.insert(icon.name, icon);
        self
    }

    pub fn get(&self, name: &str) -> Option<&IconDef> {
        self.icons.get(name)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let registry = use_context::<IconRegistry>().unwrap_or_default();

    match registry.get(&props.name) {
        Some(icon) => html! {
            <svg class={classes!("icon", props.class.clone())} viewBox={icon.view_box}
                 fill="currentColor" aria-hidden="true">
                <path d={icon.path} />
            </svg>
        },
        None => {
            log::warn!("⚠️ Icono `{}` no registrado", props.name);
            Html::default()
        }
    }
}
