use std::cmp::Ordering;

use iter_collate::{collate, collate_by, collate_by_key, collate::Builder};

/// Wrapper for an item and its source index
/// Has the same ordering as the item
#[derive(Debug, Clone, Copy)]
pub struct LabeledItem<T> {
    pub item: T,
    pub source_idx: usize,
}

impl<T: Ord> Ord for LabeledItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.item.cmp(&other.item)
    }
}

impl<T: PartialOrd> PartialOrd for LabeledItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.item.partial_cmp(&other.item)
    }
}

impl<T: PartialEq> PartialEq for LabeledItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl<T> Eq for LabeledItem<T> where T: Eq {}

struct CollateChecker<'a, T> {
    items: Vec<&'a [T]>,
    orig: &'a Vec<Vec<T>>,
}

impl<'a, T> CollateChecker<'a, T>
where
    T: std::fmt::Debug + Ord,
{
    fn new(items: &'a Vec<Vec<T>>) -> Self {
        Self {
            orig: items,
            items: Vec::new(),
        }
    }

    fn check_collation(&mut self, collation: impl IntoIterator<Item = LabeledItem<T>>) {
        // reset:
        self.items.clear();
        self.items
            .extend(self.orig.iter().map(AsRef::<[T]>::as_ref));
        collation
            .into_iter()
            .for_each(|choice| self.check_choice(&choice));

        assert!(
            self.items.iter().all(|it| it.is_empty()),
            "Some items are not consumed"
        );
    }

    fn check_choice(&mut self, choice: &LabeledItem<T>) {
        for (source_idx, item) in self
            .items
            .iter()
            .enumerate()
            .filter_map(|(source_idx, items)| items.first().map(|item| (source_idx, item)))
        {
            match item.cmp(&choice.item) {
                Ordering::Less => {
                    panic!(
                        "chosen item {choice:?} is greater than head {item:?} of source {source_idx}",
                    )
                }
                Ordering::Equal => {
                    assert!(
                        source_idx >= choice.source_idx,
                        "head of earlier source {source_idx} should've been chosen instead of {choice:?}"
                    );
                }
                _ => {}
            }
        }
        let Some((item, rest)) = self.items[choice.source_idx].split_first() else {
            panic!("item was consumed from empty source {}", choice.source_idx);
        };

        assert_eq!(item, &choice.item);
        self.items[choice.source_idx] = rest;
    }
}

/// Runs `input` through every collation flavor, asserting global sortedness,
/// stable tie-breaking, per-source order, and element conservation.
pub fn test_all_collations<T>(input: &Vec<Vec<T>>)
where
    T: Ord + std::fmt::Debug + Copy,
{
    let mkiter = || {
        input.iter().enumerate().map(|(source_idx, items)| {
            items
                .iter()
                .copied()
                .map(move |item| LabeledItem { item, source_idx })
        })
    };

    let mut checker = CollateChecker::new(input);

    checker.check_collation(collate(mkiter()));
    checker.check_collation(Builder::new(mkiter()).build());
    checker.check_collation(collate_by(mkiter(), |a, b| a.cmp(b)));
    checker.check_collation(collate_by_key(mkiter(), |labeled| labeled.item));
    checker.check_collation(collate(mkiter()).collect::<Vec<_>>());
}
