//! Navbar highlight tones toggled by modal visibility.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTone {
    Active,
    Idle,
}

impl NavTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Active => "advm-green-color",
            Self::Idle => "white-color",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Active => Self::Idle,
            Self::Idle => Self::Active,
        }
    }
}

/// Swap the tone classes on element `id`. Missing elements are ignored.
#[cfg(feature = "hydrate")]
pub fn set_tone(id: &str, tone: NavTone) {
    let Some(el) = super::dom::by_id(id) else {
        return;
    };
    let classes = el.class_list();
    let _ = classes.remove_1(tone.opposite().class());
    let _ = classes.add_1(tone.class());
}
