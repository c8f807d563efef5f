use anyhow::Result;

use crate::models::AddOutcome;
use crate::store::{RecordStore, same_product};

/// Recipe ingredients that are not in the fridge, in recipe order.
///
/// Both sides are expected to be lower-case already: recipe ingredients are
/// lowered when extracted and fridge products are lowered when stored.
#[must_use]
pub fn missing_ingredients(recipe_ingredients: &[String], fridge: &[String]) -> Vec<String> {
    recipe_ingredients
        .iter()
        .filter(|ingredient| !fridge.contains(ingredient))
        .cloned()
        .collect()
}

/// Shopping list split by whether the product is already in the fridge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingSync {
    pub removed: Vec<String>,
    pub remaining: Vec<String>,
}

#[must_use]
pub fn partition_by_fridge(shopping_list: &[String], fridge: &[String]) -> ShoppingSync {
    let (removed, remaining): (Vec<String>, Vec<String>) = shopping_list
        .iter()
        .cloned()
        .partition(|item| fridge.iter().any(|f| same_product(f, item)));
    ShoppingSync { removed, remaining }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    EmptyList,
    NothingInFridge,
    Removed(Vec<String>),
    Declined(Vec<String>),
}

/// Drop shopping list products that are already in the fridge.
///
/// `confirm` is shown the products that would be removed; the list is only
/// rewritten when it returns true.
pub fn sync_shopping_list_with_fridge(
    shopping: &mut dyn RecordStore,
    fridge: &dyn RecordStore,
    confirm: &mut dyn FnMut(&[String]) -> bool,
) -> Result<SyncOutcome> {
    let list = shopping.list()?;
    if list.is_empty() {
        return Ok(SyncOutcome::EmptyList);
    }

    let sync = partition_by_fridge(&list, &fridge.list()?);
    if sync.removed.is_empty() {
        return Ok(SyncOutcome::NothingInFridge);
    }

    if !confirm(&sync.removed) {
        return Ok(SyncOutcome::Declined(sync.removed));
    }

    shopping.replace_all(&sync.remaining)?;
    Ok(SyncOutcome::Removed(sync.removed))
}

/// Put every ingredient that is not in the fridge on the shopping list.
///
/// Returns one outcome per ingredient that was missing from the fridge; an
/// empty result means nothing needed to be bought and nothing was written.
pub fn add_missing_to_shopping_list(
    ingredients: &[String],
    fridge: &dyn RecordStore,
    shopping: &mut dyn RecordStore,
) -> Result<Vec<AddOutcome>> {
    let fridge = fridge.list()?;
    let mut outcomes = Vec::new();
    for ingredient in ingredients {
        if ingredient.trim().is_empty() || fridge.iter().any(|f| same_product(f, ingredient)) {
            continue;
        }
        outcomes.push(shopping.add(ingredient)?);
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ItemCase, MemoryStore};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_missing_ingredients() {
        let missing = missing_ingredients(&strings(&["egg", "milk"]), &strings(&["egg"]));
        assert_eq!(missing, vec!["milk"]);
    }

    #[test]
    fn test_missing_ingredients_preserves_order() {
        let recipe = strings(&["sugar", "egg", "flour", "butter"]);
        let fridge = strings(&["egg", "butter"]);
        assert_eq!(missing_ingredients(&recipe, &fridge), vec!["sugar", "flour"]);
        assert!(missing_ingredients(&recipe, &recipe).is_empty());
    }

    #[test]
    fn test_missing_ingredients_is_case_sensitive() {
        let missing = missing_ingredients(&strings(&["egg"]), &strings(&["Egg"]));
        assert_eq!(missing, vec!["egg"]);
    }

    #[test]
    fn test_partition_by_fridge() {
        let sync = partition_by_fridge(
            &strings(&["Milk", "Bread", "eggs", "Apples"]),
            &strings(&["milk", "eggs"]),
        );
        assert_eq!(sync.removed, vec!["Milk", "eggs"]);
        assert_eq!(sync.remaining, vec!["Bread", "Apples"]);
    }

    #[test]
    fn test_sync_confirmed_removes_fridge_products() {
        let mut shopping = MemoryStore::with_items(ItemCase::Verbatim, &["Milk", "Bread"]);
        let fridge = MemoryStore::with_items(ItemCase::Lower, &["milk"]);

        let mut shown = Vec::new();
        let outcome = sync_shopping_list_with_fridge(&mut shopping, &fridge, &mut |items: &[String]| {
            shown = items.to_vec();
            true
        })
        .unwrap();

        assert_eq!(outcome, SyncOutcome::Removed(strings(&["Milk"])));
        assert_eq!(shown, vec!["Milk"]);
        assert_eq!(shopping.list().unwrap(), vec!["Bread"]);
    }

    #[test]
    fn test_sync_declined_leaves_list() {
        let mut shopping = MemoryStore::with_items(ItemCase::Verbatim, &["Milk", "Bread"]);
        let fridge = MemoryStore::with_items(ItemCase::Lower, &["milk"]);

        let outcome =
            sync_shopping_list_with_fridge(&mut shopping, &fridge, &mut |_: &[String]| false).unwrap();

        assert_eq!(outcome, SyncOutcome::Declined(strings(&["Milk"])));
        assert_eq!(shopping.list().unwrap(), vec!["Milk", "Bread"]);
    }

    #[test]
    fn test_sync_nothing_to_do() {
        let fridge = MemoryStore::with_items(ItemCase::Lower, &["milk"]);

        let mut empty = MemoryStore::new(ItemCase::Verbatim);
        assert_eq!(
            sync_shopping_list_with_fridge(&mut empty, &fridge, &mut |_: &[String]| true).unwrap(),
            SyncOutcome::EmptyList
        );

        let mut shopping = MemoryStore::with_items(ItemCase::Verbatim, &["Bread"]);
        assert_eq!(
            sync_shopping_list_with_fridge(&mut shopping, &fridge, &mut |_: &[String]| true).unwrap(),
            SyncOutcome::NothingInFridge
        );
        assert_eq!(shopping.list().unwrap(), vec!["Bread"]);
    }

    #[test]
    fn test_add_missing_to_shopping_list() {
        let fridge = MemoryStore::with_items(ItemCase::Lower, &["egg", "milk"]);
        let mut shopping = MemoryStore::with_items(ItemCase::Verbatim, &["flour"]);

        let outcomes = add_missing_to_shopping_list(
            &strings(&["Egg", "flour", "sugar"]),
            &fridge,
            &mut shopping,
        )
        .unwrap();

        assert_eq!(
            outcomes,
            vec![
                AddOutcome::AlreadyExists("flour".to_string()),
                AddOutcome::Added("sugar".to_string()),
            ]
        );
        assert_eq!(shopping.list().unwrap(), vec!["flour", "sugar"]);
    }

    #[test]
    fn test_add_missing_everything_in_fridge() {
        let fridge = MemoryStore::with_items(ItemCase::Lower, &["egg", "milk"]);
        let mut shopping = MemoryStore::new(ItemCase::Verbatim);

        let outcomes =
            add_missing_to_shopping_list(&strings(&["EGG", "milk"]), &fridge, &mut shopping)
                .unwrap();

        assert!(outcomes.is_empty());
        assert!(shopping.list().unwrap().is_empty());
    }
}
