//! Column sorting with header-click semantics.
//!
//! A [`Sorter`] remembers which column is active and in which direction.
//! Selecting the active column again flips the direction; selecting another
//! column makes it active in ascending order.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use clap::ValueEnum;
use feruca::Collator;
use serde::Serialize;

use crate::names::format_name;
use crate::types::{User, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Value a column sorts by.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
}

impl SortValue<'_> {
    fn kind(&self) -> u8 {
        match self {
            SortValue::Text(_) => 0,
            SortValue::Number(_) => 1,
        }
    }
}

/// Compare two sort values in ascending order.
///
/// Text compares case-insensitively with Unicode collation (root locale),
/// numbers numerically. A text value and a number compare equal.
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    compare_with(&mut Collator::default(), a, b)
}

fn compare_with(collator: &mut Collator, a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => {
            collator.collate(a.to_lowercase().as_str(), b.to_lowercase().as_str())
        }
        (SortValue::Number(a), SortValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    }
}

/// Active column and direction for one table.
#[derive(Debug, Clone)]
pub struct Sorter<K> {
    field: Option<K>,
    direction: SortDirection,
}

impl<K> Default for Sorter<K> {
    fn default() -> Self {
        Self {
            field: None,
            direction: SortDirection::Asc,
        }
    }
}

impl<K: Copy + PartialEq> Sorter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_field(&self) -> Option<K> {
        self.field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.direction
    }

    /// Header click on `field`.
    pub fn handle_sort(&mut self, field: K) {
        if self.field == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Asc;
        }
    }

    /// Arrow shown next to a column header.
    pub fn sort_icon(&self, field: K) -> &'static str {
        match (self.field == Some(field), self.direction) {
            (false, _) => "",
            (true, SortDirection::Asc) => " ↑",
            (true, SortDirection::Desc) => " ↓",
        }
    }

    /// Return `items` ordered by the active column. Ties keep their input
    /// order, and with no active column the input order is returned as-is.
    pub fn sorted<'a, T, I, F>(&self, items: I, select: F) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        F: Fn(&'a T, K) -> SortValue<'a>,
    {
        let Some(field) = self.field else {
            return items.into_iter().collect();
        };

        let mut keyed: Vec<(SortValue<'a>, &'a T)> = items
            .into_iter()
            .map(|item| (select(item, field), item))
            .collect();

        let direction = self.direction;
        let mut collator = Collator::default();
        let mut cmp = |a: &SortValue<'_>, b: &SortValue<'_>| {
            direction.apply(compare_with(&mut collator, a, b))
        };

        if is_totally_ordered(&keyed) {
            keyed.sort_by(|(a, _), (b, _)| cmp(a, b));
        } else {
            // Mixed kinds (or NaN) are not a total order, which `sort_by`
            // requires.
            insertion_sort_by(&mut keyed, |(a, _), (b, _)| cmp(a, b));
        }

        keyed.into_iter().map(|(_, item)| item).collect()
    }
}

fn is_totally_ordered<T>(keyed: &[(SortValue<'_>, T)]) -> bool {
    let mut kinds = keyed.iter().map(|(v, _)| v.kind());
    let Some(first) = kinds.next() else {
        return true;
    };
    kinds.all(|k| k == first)
        && keyed
            .iter()
            .all(|(v, _)| !matches!(v, SortValue::Number(n) if n.is_nan()))
}

/// Stable sort that tolerates comparators without a total order.
fn insertion_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sortable columns of the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UserSortKey {
    /// Numeric id
    Id,
    /// Name exactly as stored
    Name,
    /// Name as displayed ("Last, First")
    #[value(alias = "formattedName")]
    FormattedName,
    Username,
    Email,
    Phone,
    Website,
}

impl fmt::Display for UserSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::FormattedName => "formattedName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Website => "website",
        };
        write!(f, "{label}")
    }
}

/// Field selector for [`UserSortKey`].
pub fn user_sort_value(user: &User, key: UserSortKey) -> SortValue<'_> {
    match key {
        UserSortKey::Id => match &user.id {
            UserId::Number(n) => SortValue::Number(*n as f64),
            UserId::Text(s) => SortValue::Text(Cow::Borrowed(s)),
        },
        UserSortKey::Name => SortValue::Text(Cow::Borrowed(&user.name)),
        UserSortKey::FormattedName => SortValue::Text(Cow::Owned(format_name(&user.name))),
        UserSortKey::Username => SortValue::Text(Cow::Borrowed(&user.username)),
        UserSortKey::Email => SortValue::Text(Cow::Borrowed(&user.email)),
        UserSortKey::Phone => SortValue::Text(Cow::Borrowed(&user.phone)),
        UserSortKey::Website => SortValue::Text(Cow::Borrowed(&user.website)),
    }
}

pub type UserSorter = Sorter<UserSortKey>;

impl Sorter<UserSortKey> {
    pub fn sorted_users<'a, I>(&self, users: I) -> Vec<&'a User>
    where
        I: IntoIterator<Item = &'a User>,
    {
        self.sorted(users, user_sort_value)
    }
}
