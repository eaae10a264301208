//! Shapes for legal and legislative materials

use serde::{Deserialize, Serialize};

use crate::item::ItemCore;
use crate::item_type::ItemType;
use crate::shapes::ItemShape;

/// A bill before a legislature.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub bill_number: Option<String>,
    pub code: Option<String>,
    pub code_volume: Option<String>,
    pub section: Option<String>,
    pub code_pages: Option<String>,
    pub legislative_body: Option<String>,
    pub session: Option<String>,
    pub history: Option<String>,
    pub date: Option<String>,
    pub language: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub short_title: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for BillItem {
    const ITEM_TYPE: ItemType = ItemType::Bill;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "bill_number",
        "code",
        "code_volume",
        "section",
        "code_pages",
        "legislative_body",
        "session",
        "history",
        "date",
        "language",
        "url",
        "access_date",
        "short_title",
        "rights",
        "extra",
    ];
}

/// A decided court case. Uses `case_name` in place of a plain title.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub case_name: Option<String>,
    pub abstract_note: Option<String>,
    pub court: Option<String>,
    pub date_decided: Option<String>,
    pub docket_number: Option<String>,
    pub reporter: Option<String>,
    pub reporter_volume: Option<String>,
    pub first_page: Option<String>,
    pub history: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for CaseItem {
    const ITEM_TYPE: ItemType = ItemType::Case;
    const FIELDS: &'static [&'static str] = &[
        "case_name",
        "abstract_note",
        "court",
        "date_decided",
        "docket_number",
        "reporter",
        "reporter_volume",
        "first_page",
        "history",
        "language",
        "short_title",
        "url",
        "access_date",
        "rights",
        "extra",
    ];
}

/// A legislative hearing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HearingItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub committee: Option<String>,
    pub place: Option<String>,
    pub publisher: Option<String>,
    pub number_of_volumes: Option<String>,
    pub document_number: Option<String>,
    pub pages: Option<String>,
    pub legislative_body: Option<String>,
    pub session: Option<String>,
    pub history: Option<String>,
    pub date: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for HearingItem {
    const ITEM_TYPE: ItemType = ItemType::Hearing;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "committee",
        "place",
        "publisher",
        "number_of_volumes",
        "document_number",
        "pages",
        "legislative_body",
        "session",
        "history",
        "date",
        "language",
        "short_title",
        "url",
        "access_date",
        "rights",
        "extra",
    ];
}

/// A granted or filed patent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatentItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub place: Option<String>,
    pub country: Option<String>,
    pub assignee: Option<String>,
    pub issuing_authority: Option<String>,
    pub patent_number: Option<String>,
    pub filing_date: Option<String>,
    pub pages: Option<String>,
    pub application_number: Option<String>,
    pub priority_numbers: Option<String>,
    pub issue_date: Option<String>,
    pub references: Option<String>,
    pub legal_status: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for PatentItem {
    const ITEM_TYPE: ItemType = ItemType::Patent;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "place",
        "country",
        "assignee",
        "issuing_authority",
        "patent_number",
        "filing_date",
        "pages",
        "application_number",
        "priority_numbers",
        "issue_date",
        "references",
        "legal_status",
        "language",
        "short_title",
        "url",
        "access_date",
        "rights",
        "extra",
    ];
}

/// An enacted statute. Uses `name_of_act` in place of a plain title.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatuteItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub name_of_act: Option<String>,
    pub abstract_note: Option<String>,
    pub code: Option<String>,
    pub code_number: Option<String>,
    pub public_law_number: Option<String>,
    pub date_enacted: Option<String>,
    pub pages: Option<String>,
    pub section: Option<String>,
    pub session: Option<String>,
    pub history: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for StatuteItem {
    const ITEM_TYPE: ItemType = ItemType::Statute;
    const FIELDS: &'static [&'static str] = &[
        "name_of_act",
        "abstract_note",
        "code",
        "code_number",
        "public_law_number",
        "date_enacted",
        "pages",
        "section",
        "session",
        "history",
        "language",
        "short_title",
        "url",
        "access_date",
        "rights",
        "extra",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titled_differently_shaped_records_do_not_declare_title() {
        assert!(CaseItem::FIELDS.contains(&"case_name"));
        assert!(!CaseItem::FIELDS.contains(&"title"));
        assert!(StatuteItem::FIELDS.contains(&"name_of_act"));
        assert!(!StatuteItem::FIELDS.contains(&"title"));
    }
}
