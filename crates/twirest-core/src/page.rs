//! Pagination metadata shared by every list response

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Page metadata, decoded from the attributes of a list element
///
/// ```xml
/// <Calls page="0" numpages="3" pagesize="50" total="147" start="0" end="49"
///        uri="..." firstpageuri="..." previouspageuri="" nextpageuri="..." lastpageuri="...">
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(rename = "@page", deserialize_with = "crate::text::number_or_zero")]
    pub page: u32,

    #[serde(rename = "@numpages", deserialize_with = "crate::text::number_or_zero")]
    pub num_pages: u32,

    #[serde(rename = "@pagesize", deserialize_with = "crate::text::number_or_zero")]
    pub page_size: u32,

    #[serde(rename = "@total", deserialize_with = "crate::text::number_or_zero")]
    pub total: u32,

    #[serde(rename = "@start", deserialize_with = "crate::text::number_or_zero")]
    pub start: u32,

    #[serde(rename = "@end", deserialize_with = "crate::text::number_or_zero")]
    pub end: u32,

    #[serde(rename = "@uri")]
    pub uri: String,

    #[serde(rename = "@firstpageuri")]
    pub first_page_uri: String,

    #[serde(rename = "@previouspageuri")]
    pub previous_page_uri: String,

    #[serde(rename = "@nextpageuri")]
    pub next_page_uri: String,

    #[serde(rename = "@lastpageuri")]
    pub last_page_uri: String,
}

impl Page {
    /// True when the API advertised a following page
    pub fn has_next(&self) -> bool {
        !self.next_page_uri.is_empty()
    }

    /// True when the API advertised a preceding page
    pub fn has_previous(&self) -> bool {
        !self.previous_page_uri.is_empty()
    }
}

/// A record that can appear in a paginated list
pub trait ListItem {
    /// Element name of one record inside its list element (`Call` in `<Calls>`)
    const ELEMENT: &'static str;
}

/// A "list of X" response: page metadata plus the records in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListResponse<T> {
    pub page: Page,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(page: Page, items: Vec<T>) -> Self {
        Self { page, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListResponse<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// The XML list element carries the page attributes and the records side by
// side. Serde's `flatten` loses attribute typing with quick-xml, so the wire
// shape spells the attributes out. Records are read from any child element
// (`$value`) and written under `ListItem::ELEMENT`.

#[derive(serde::Deserialize)]
struct ListWire<T> {
    #[serde(rename = "@page", default, deserialize_with = "crate::text::number_or_zero")]
    page: u32,
    #[serde(rename = "@numpages", default, deserialize_with = "crate::text::number_or_zero")]
    num_pages: u32,
    #[serde(rename = "@pagesize", default, deserialize_with = "crate::text::number_or_zero")]
    page_size: u32,
    #[serde(rename = "@total", default, deserialize_with = "crate::text::number_or_zero")]
    total: u32,
    #[serde(rename = "@start", default, deserialize_with = "crate::text::number_or_zero")]
    start: u32,
    #[serde(rename = "@end", default, deserialize_with = "crate::text::number_or_zero")]
    end: u32,
    #[serde(rename = "@uri", default)]
    uri: String,
    #[serde(rename = "@firstpageuri", default)]
    first_page_uri: String,
    #[serde(rename = "@previouspageuri", default)]
    previous_page_uri: String,
    #[serde(rename = "@nextpageuri", default)]
    next_page_uri: String,
    #[serde(rename = "@lastpageuri", default)]
    last_page_uri: String,
    #[serde(rename = "$value", default = "Vec::new")]
    items: Vec<T>,
}

impl<'de, T> Deserialize<'de> for ListResponse<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = ListWire::<T>::deserialize(deserializer)?;
        Ok(Self {
            page: Page {
                page: wire.page,
                num_pages: wire.num_pages,
                page_size: wire.page_size,
                total: wire.total,
                start: wire.start,
                end: wire.end,
                uri: wire.uri,
                first_page_uri: wire.first_page_uri,
                previous_page_uri: wire.previous_page_uri,
                next_page_uri: wire.next_page_uri,
                last_page_uri: wire.last_page_uri,
            },
            items: wire.items,
        })
    }
}

impl<T> Serialize for ListResponse<T>
where
    T: Serialize + ListItem,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let page = &self.page;
        let mut state = serializer.serialize_struct("List", 12)?;
        state.serialize_field("@page", &page.page)?;
        state.serialize_field("@numpages", &page.num_pages)?;
        state.serialize_field("@pagesize", &page.page_size)?;
        state.serialize_field("@total", &page.total)?;
        state.serialize_field("@start", &page.start)?;
        state.serialize_field("@end", &page.end)?;
        state.serialize_field("@uri", &page.uri)?;
        state.serialize_field("@firstpageuri", &page.first_page_uri)?;
        state.serialize_field("@previouspageuri", &page.previous_page_uri)?;
        state.serialize_field("@nextpageuri", &page.next_page_uri)?;
        state.serialize_field("@lastpageuri", &page.last_page_uri)?;
        state.serialize_field(T::ELEMENT, &self.items)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_navigation() {
        let mut page = Page::default();
        assert!(!page.has_next());
        assert!(!page.has_previous());

        page.next_page_uri = "/2010-04-01/Accounts/AC1/Calls?Page=1".to_string();
        assert!(page.has_next());
    }

    #[test]
    fn test_list_iteration_keeps_order() {
        let list = ListResponse::new(Page::default(), vec!["a", "b", "c"]);
        assert_eq!(list.len(), 3);
        let collected: Vec<_> = list.iter().copied().collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
        assert_eq!(list.into_iter().last(), Some("c"));
    }
}
