use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Closed set of entrance variants for the scroll-reveal capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealDirection {
    Up,
    Down,
    Left,
    Right,
    Scale,
    Rotate,
    Fade,
}

/// Hidden/visible class pairs applied around the transition.
#[derive(Debug, PartialEq, Eq)]
pub struct RevealEffect {
    pub hidden: &'static str,
    pub visible: &'static str,
}

// Directional variants are configuration data, not behavior.
static REVEAL_EFFECTS: [(RevealDirection, RevealEffect); 7] = [
    (
        RevealDirection::Up,
        RevealEffect {
            hidden: "opacity-0 translate-y-16",
            visible: "opacity-100 translate-y-0",
        },
    ),
    (
        RevealDirection::Down,
        RevealEffect {
            hidden: "opacity-0 -translate-y-16",
            visible: "opacity-100 translate-y-0",
        },
    ),
    (
        RevealDirection::Left,
        RevealEffect {
            hidden: "opacity-0 -translate-x-16",
            visible: "opacity-100 translate-x-0",
        },
    ),
    (
        RevealDirection::Right,
        RevealEffect {
            hidden: "opacity-0 translate-x-16",
            visible: "opacity-100 translate-x-0",
        },
    ),
    (
        RevealDirection::Scale,
        RevealEffect {
            hidden: "opacity-0 scale-75",
            visible: "opacity-100 scale-100",
        },
    ),
    (
        RevealDirection::Rotate,
        RevealEffect {
            hidden: "opacity-0 -rotate-180 scale-75",
            visible: "opacity-100 rotate-0 scale-100",
        },
    ),
    (
        RevealDirection::Fade,
        RevealEffect {
            hidden: "opacity-0",
            visible: "opacity-100",
        },
    ),
];

impl RevealDirection {
    pub fn all() -> Vec<RevealDirection> {
        REVEAL_EFFECTS.iter().map(|(dir, _)| *dir).collect()
    }

    pub fn effect(&self) -> &'static RevealEffect {
        REVEAL_EFFECTS
            .iter()
            .find(|(dir, _)| dir == self)
            .map(|(_, effect)| effect)
            .expect("every direction has an effect entry")
    }
}

/// Reveals its children once they scroll into the viewport.
///
/// The latch is one-way: content that has appeared stays visible even when
/// scrolled back out.
#[component]
pub fn Reveal(
    #[prop(default = RevealDirection::Up)] direction: RevealDirection,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visibility = use_element_visibility(el);
    let (shown, set_shown) = signal(false);
    Effect::new(move |_| {
        if visibility.get() {
            set_shown(true);
        }
    });

    let effect = direction.effect();
    view! {
        <div
            node_ref=el
            class=move || {
                format!(
                    "transition-all duration-700 ease-out {}",
                    if shown.get() { effect.visible } else { effect.hidden },
                )
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_direction_has_an_effect() {
        for direction in RevealDirection::all() {
            let effect = direction.effect();
            assert!(!effect.hidden.is_empty());
            assert!(!effect.visible.is_empty());
        }
    }

    #[test]
    fn test_hidden_state_always_differs_from_visible() {
        for direction in RevealDirection::all() {
            let effect = direction.effect();
            assert_ne!(effect.hidden, effect.visible);
            assert!(effect.hidden.contains("opacity-0"));
            assert!(effect.visible.contains("opacity-100"));
        }
    }
}
