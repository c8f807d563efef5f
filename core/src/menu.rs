//! Menu tables for the interactive console.
//!
//! Each menu maps single-character commands to a tagged action. The CLI owns
//! the loops; this module only decides what a line of input means.

/// Command that leaves the current menu.
pub const BACK_KEY: &str = "x";

#[derive(Debug)]
pub struct MenuEntry<A> {
    pub key: &'static str,
    pub label: &'static str,
    pub action: A,
}

#[derive(Debug)]
pub struct Menu<A: 'static> {
    pub title: &'static str,
    pub entries: &'static [MenuEntry<A>],
    pub back_label: &'static str,
    /// Printed when the user leaves this menu.
    pub leave_message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<A> {
    Action(A),
    Back,
    Invalid,
}

impl<A: 'static> Menu<A> {
    /// Choice lines in display order, back command last.
    pub fn choices(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .map(|e| format!("{} - {}", e.key, e.label))
            .chain(std::iter::once(format!(
                "{BACK_KEY} - {}",
                self.back_label
            )))
    }
}

/// Resolve one line of user input against a menu.
///
/// Input is trimmed and matched case-insensitively.
pub fn dispatch<A: Copy + 'static>(menu: &Menu<A>, input: &str) -> Selection<A> {
    let input = input.trim().to_lowercase();
    if let Some(entry) = menu.entries.iter().find(|e| e.key == input) {
        return Selection::Action(entry.action);
    }
    if input == BACK_KEY {
        Selection::Back
    } else {
        Selection::Invalid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    Fridge,
    Recipes,
    ShoppingList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FridgeAction {
    Show,
    Add,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FridgeClearAction {
    RemoveOne,
    RemoveAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeAction {
    Random,
    ByWeather,
    FromFridge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoppingAction {
    Show,
    Add,
    Remove,
    AddIngredients,
    Clear,
    SyncWithFridge,
}

pub const MAIN_MENU: Menu<MainAction> = Menu {
    title: "Hoofdmenu",
    entries: &[
        MenuEntry {
            key: "1",
            label: "Koelkast",
            action: MainAction::Fridge,
        },
        MenuEntry {
            key: "2",
            label: "Recepten",
            action: MainAction::Recipes,
        },
        MenuEntry {
            key: "3",
            label: "Boodschappenlijstje",
            action: MainAction::ShoppingList,
        },
    ],
    back_label: "Programma afsluiten",
    leave_message: "Het programma wordt afgesloten.",
};

pub const FRIDGE_MENU: Menu<FridgeAction> = Menu {
    title: "Koelkast",
    entries: &[
        MenuEntry {
            key: "1",
            label: "Bekijk koelkast",
            action: FridgeAction::Show,
        },
        MenuEntry {
            key: "2",
            label: "Koelkast bijvullen",
            action: FridgeAction::Add,
        },
        MenuEntry {
            key: "3",
            label: "Koelkast legen",
            action: FridgeAction::Clear,
        },
    ],
    back_label: "Terug naar hoofdmenu",
    leave_message: "U gaat terug naar het hoofdmenu.",
};

pub const FRIDGE_CLEAR_MENU: Menu<FridgeClearAction> = Menu {
    title: "Koelkast legen",
    entries: &[
        MenuEntry {
            key: "1",
            label: "Specifiek product verwijderen",
            action: FridgeClearAction::RemoveOne,
        },
        MenuEntry {
            key: "2",
            label: "Alle producten verwijderen",
            action: FridgeClearAction::RemoveAll,
        },
    ],
    back_label: "Terug naar Koelkast menu",
    leave_message: "U gaat terug naar het koelkast menu.",
};

pub const RECIPE_MENU: Menu<RecipeAction> = Menu {
    title: "Recepten",
    entries: &[
        MenuEntry {
            key: "1",
            label: "Genereer willekeurig recept",
            action: RecipeAction::Random,
        },
        MenuEntry {
            key: "2",
            label: "Recept op basis van het weer",
            action: RecipeAction::ByWeather,
        },
        MenuEntry {
            key: "3",
            label: "Recepten op basis van koelkast voorraad",
            action: RecipeAction::FromFridge,
        },
    ],
    back_label: "Terug naar hoofdmenu",
    leave_message: "U gaat terug naar het hoofdmenu.",
};

pub const SHOPPING_MENU: Menu<ShoppingAction> = Menu {
    title: "Boodschappenlijstje",
    entries: &[
        MenuEntry {
            key: "1",
            label: "Bekijk boodschappenlijstje",
            action: ShoppingAction::Show,
        },
        MenuEntry {
            key: "2",
            label: "Product toevoegen aan boodschappenlijstje",
            action: ShoppingAction::Add,
        },
        MenuEntry {
            key: "3",
            label: "Product verwijderen van boodschappenlijstje",
            action: ShoppingAction::Remove,
        },
        MenuEntry {
            key: "4",
            label: "Voeg recept ingrediënten toe aan boodschappenlijstje",
            action: ShoppingAction::AddIngredients,
        },
        MenuEntry {
            key: "5",
            label: "Boodschappenlijstje leegmaken",
            action: ShoppingAction::Clear,
        },
        MenuEntry {
            key: "6",
            label: "Controleer boodschappenlijstje met producten in koelkast",
            action: ShoppingAction::SyncWithFridge,
        },
    ],
    back_label: "Terug naar hoofdmenu",
    leave_message: "U gaat terug naar het hoofdmenu.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_main_menu() {
        assert_eq!(
            dispatch(&MAIN_MENU, "1"),
            Selection::Action(MainAction::Fridge)
        );
        assert_eq!(
            dispatch(&MAIN_MENU, " 2\n"),
            Selection::Action(MainAction::Recipes)
        );
        assert_eq!(
            dispatch(&MAIN_MENU, "3"),
            Selection::Action(MainAction::ShoppingList)
        );
    }

    #[test]
    fn test_dispatch_back_is_case_insensitive() {
        assert_eq!(dispatch(&FRIDGE_MENU, "x"), Selection::Back);
        assert_eq!(dispatch(&FRIDGE_MENU, "X"), Selection::Back);
    }

    #[test]
    fn test_dispatch_invalid() {
        assert_eq!(dispatch(&MAIN_MENU, "4"), Selection::Invalid);
        assert_eq!(dispatch(&MAIN_MENU, ""), Selection::Invalid);
        assert_eq!(dispatch(&SHOPPING_MENU, "koelkast"), Selection::Invalid);
        assert_eq!(dispatch(&FRIDGE_CLEAR_MENU, "3"), Selection::Invalid);
    }

    #[test]
    fn test_dispatch_every_entry_reachable() {
        for entry in SHOPPING_MENU.entries {
            assert_eq!(
                dispatch(&SHOPPING_MENU, entry.key),
                Selection::Action(entry.action)
            );
        }
        for entry in RECIPE_MENU.entries {
            assert_eq!(
                dispatch(&RECIPE_MENU, entry.key),
                Selection::Action(entry.action)
            );
        }
    }

    #[test]
    fn test_keys_unique_and_not_back() {
        fn check<A: 'static>(menu: &Menu<A>) {
            let mut keys: Vec<&str> = menu.entries.iter().map(|e| e.key).collect();
            assert!(!keys.contains(&BACK_KEY), "{} uses the back key", menu.title);
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), menu.entries.len(), "{} has duplicate keys", menu.title);
        }
        check(&MAIN_MENU);
        check(&FRIDGE_MENU);
        check(&FRIDGE_CLEAR_MENU);
        check(&RECIPE_MENU);
        check(&SHOPPING_MENU);
    }

    #[test]
    fn test_choices_end_with_back() {
        let choices: Vec<String> = FRIDGE_CLEAR_MENU.choices().collect();
        assert_eq!(
            choices,
            vec![
                "1 - Specifiek product verwijderen",
                "2 - Alle producten verwijderen",
                "x - Terug naar Koelkast menu",
            ]
        );
    }
}
