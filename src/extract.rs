//! Page-specific projections from a [`Document`] into typed records.
//!
//! Every extractor follows the same recipe: filter by a namespace or source
//! convention, optionally sort by `order`, then build one record per
//! statement. Composite entities (tools, docs navigation sections) group the
//! statements sharing a source anchor; one designated carrier statement holds
//! the scalar fields and the others contribute list items. A group without
//! its carrier produces no record.
//!
//! Missing content never fails an extraction, it only yields defaults or
//! empty lists so that the corresponding page section renders blank.

use serde::Serialize;

use crate::construct::{Document, Statement};
use crate::query::{
    by_source, filter_by_namespace, get_mod_as, get_mod_or, group_by_source, sort_by_order,
    Field, DEFAULT_ORDER, ORDER,
};

// ------------- Helpers -------------
fn text(statement: &Statement, key: &str, default: &str) -> String {
    get_mod_or(statement, key, default.to_owned())
}

fn optional_text(statement: &Statement, key: &str) -> Option<String> {
    get_mod_as(statement, key)
}

fn order(statement: &Statement) -> f64 {
    get_mod_or(statement, ORDER, DEFAULT_ORDER)
}

// ------------- Records -------------
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaData {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroData {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureData {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub order: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeExampleData {
    pub title: String,
    pub code: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBlock {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub order: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub order: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolFeature {
    pub capability: String,
    pub api: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCommand {
    pub usage: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct McpTool {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSchema {
    pub domain: String,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolData {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub order: f64,
    pub features: Vec<ToolFeature>,
    pub commands: Vec<ToolCommand>,
    pub mcp_tools: Vec<McpTool>,
    pub schemas: Vec<ToolSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocNavLink {
    pub label: String,
    pub href: String,
    pub order: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocNavSection {
    pub label: String,
    pub order: f64,
    pub links: Vec<DocNavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub seo: String,
    pub aso: String,
    pub order: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelData {
    pub name: String,
    pub year: String,
    pub layer: String,
    pub description: String,
    pub order: f64,
}

// ------------- Page bundles -------------
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub meta: MetaData,
    pub hero: Option<HeroData>,
    pub features: Vec<FeatureData>,
    pub code_examples: Vec<CodeExampleData>,
    pub content: Vec<ContentBlock>,
    pub faq: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavData {
    pub main_links: Vec<NavLink>,
    pub footer_links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolsPage {
    pub meta: MetaData,
    pub hero: Option<HeroData>,
    pub tools: Vec<ToolData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsoPage {
    pub meta: MetaData,
    pub hero: Option<HeroData>,
    pub content: Vec<ContentBlock>,
    pub faq: Vec<FaqItem>,
    pub comp_rows: Vec<ComparisonRow>,
    pub levels: Vec<LevelData>,
}

// ------------- Extractors -------------
pub fn extract_meta(doc: &Document) -> MetaData {
    match filter_by_namespace(doc, "Meta", Field::Source).first() {
        Some(s) => MetaData {
            title: text(s, "title", "STL"),
            description: text(s, "description", ""),
            keywords: optional_text(s, "keywords"),
        },
        None => MetaData {
            title: "STL".to_owned(),
            description: String::new(),
            keywords: None,
        },
    }
}

pub fn extract_hero(doc: &Document) -> Option<HeroData> {
    let s = *filter_by_namespace(doc, "Hero", Field::Target).first()?;
    Some(HeroData {
        title: text(s, "title", ""),
        subtitle: text(s, "subtitle", ""),
        cta_text: optional_text(s, "cta_text"),
        cta_href: optional_text(s, "cta_href"),
    })
}

pub fn extract_features(doc: &Document) -> Vec<FeatureData> {
    sort_by_order(filter_by_namespace(doc, "Feature", Field::Target))
        .into_iter()
        .map(|s| FeatureData {
            title: text(s, "title", s.target().name()),
            description: text(s, "description", ""),
            icon: optional_text(s, "icon"),
            order: order(s),
        })
        .collect()
}

/// Code is written on one line in the source, so `\n` escapes become newlines here.
pub fn extract_code_examples(doc: &Document) -> Vec<CodeExampleData> {
    filter_by_namespace(doc, "CodeExample", Field::Target)
        .into_iter()
        .map(|s| CodeExampleData {
            title: text(s, "title", ""),
            code: text(s, "code", "").replace("\\n", "\n"),
            language: text(s, "language", "stl"),
        })
        .collect()
}

pub fn extract_content(doc: &Document) -> Vec<ContentBlock> {
    sort_by_order(filter_by_namespace(doc, "Content", Field::Target))
        .into_iter()
        .map(|s| ContentBlock {
            title: text(s, "title", s.target().name()),
            description: text(s, "description", ""),
            href: optional_text(s, "href"),
            order: order(s),
        })
        .collect()
}

pub fn extract_faq(doc: &Document) -> Vec<FaqItem> {
    filter_by_namespace(doc, "FAQ", Field::Source)
        .into_iter()
        .map(|s| FaqItem {
            question: text(s, "question", s.source().name()),
            answer: text(s, "answer", ""),
        })
        .collect()
}

fn nav_links(doc: &Document, source: &str) -> Vec<NavLink> {
    sort_by_order(by_source(doc, source))
        .into_iter()
        .map(|s| NavLink {
            label: text(s, "label", s.target().name()),
            href: text(s, "href", "/"),
            order: order(s),
        })
        .collect()
}

pub fn extract_nav(doc: &Document) -> NavData {
    NavData {
        main_links: nav_links(doc, "Nav:Main"),
        footer_links: nav_links(doc, "Nav:Footer"),
    }
}

/// Tool sources listed on the tools page, in display order.
pub const DEFAULT_TOOL_SOURCES: [&str; 4] = ["Tool:STL_Parser", "Tool:CLI", "Tool:MCP", "Tool:Schemas"];

/// One tool per listed source anchor, in list order. Unlisted `Tool:*`
/// sources are ignored. The `[Description]` statement carries the scalar
/// fields; a source without one yields no tool.
pub fn extract_tools<S: AsRef<str>>(doc: &Document, sources: &[S]) -> Vec<ToolData> {
    sources
        .iter()
        .filter_map(|source| tool(&by_source(doc, source.as_ref())))
        .collect()
}

fn tool(group: &[&Statement]) -> Option<ToolData> {
    let carrier = *group.iter().find(|s| s.target().raw() == "Description")?;
    let related: Vec<&Statement> = group
        .iter()
        .copied()
        .filter(|s| s.target().raw() != "Description")
        .collect();
    let related = related.as_slice();
    let with_target = move |namespace: &'static str| {
        related
            .iter()
            .copied()
            .filter(move |s| s.target().in_namespace(namespace))
    };
    Some(ToolData {
        name: text(carrier, "name", ""),
        description: text(carrier, "description", ""),
        version: optional_text(carrier, "version"),
        language: optional_text(carrier, "language"),
        tests: optional_text(carrier, "tests"),
        loc: optional_text(carrier, "loc"),
        modules: optional_text(carrier, "modules"),
        install: optional_text(carrier, "install"),
        href: optional_text(carrier, "href"),
        order: order(carrier),
        features: with_target("Feature")
            .map(|s| ToolFeature {
                capability: text(s, "capability", ""),
                api: text(s, "api", ""),
            })
            .collect(),
        commands: with_target("Command")
            .map(|s| ToolCommand {
                usage: text(s, "usage", ""),
                description: text(s, "description", ""),
            })
            .collect(),
        mcp_tools: with_target("MCPTool")
            .map(|s| McpTool {
                description: text(s, "description", ""),
            })
            .collect(),
        schemas: with_target("Schema")
            .map(|s| ToolSchema {
                domain: text(s, "domain", ""),
                file: text(s, "file", ""),
            })
            .collect(),
    })
}

/// Each source anchor is a section; its `[Section:*]` statement carries the
/// label and order, its `[Link:*]` statements become the links.
pub fn extract_docs_nav(doc: &Document) -> Vec<DocNavSection> {
    let mut sections: Vec<DocNavSection> = group_by_source(doc.statements())
        .into_iter()
        .filter_map(|(_, group)| docs_nav_section(group))
        .collect();
    sections.sort_by(|a, b| a.order.partial_cmp(&b.order).unwrap_or(std::cmp::Ordering::Equal));
    sections
}

fn docs_nav_section(group: Vec<&Statement>) -> Option<DocNavSection> {
    let carrier = *group.iter().find(|s| s.target().in_namespace("Section"))?;
    let links: Vec<&Statement> = group
        .iter()
        .copied()
        .filter(|s| s.target().in_namespace("Link"))
        .collect();
    Some(DocNavSection {
        label: text(carrier, "label", ""),
        order: order(carrier),
        links: sort_by_order(links)
            .into_iter()
            .map(|s| DocNavLink {
                label: text(s, "label", s.target().name()),
                href: text(s, "href", "/docs"),
                order: order(s),
            })
            .collect(),
    })
}

pub fn extract_comparison_rows(doc: &Document) -> Vec<ComparisonRow> {
    sort_by_order(by_source(doc, "ASO:Comparison"))
        .into_iter()
        .map(|s| ComparisonRow {
            seo: text(s, "seo", ""),
            aso: text(s, "aso", ""),
            order: order(s),
        })
        .collect()
}

pub fn extract_levels(doc: &Document) -> Vec<LevelData> {
    let levels: Vec<&Statement> = filter_by_namespace(doc, "ASO", Field::Source)
        .into_iter()
        .filter(|s| s.source().name().starts_with("Level_"))
        .collect();
    sort_by_order(levels)
        .into_iter()
        .map(|s| LevelData {
            name: text(s, "name", ""),
            year: text(s, "year", ""),
            layer: text(s, "layer", ""),
            description: text(s, "description", ""),
            order: order(s),
        })
        .collect()
}

// ------------- Bundles -------------
pub fn page(doc: &Document) -> PageData {
    PageData {
        meta: extract_meta(doc),
        hero: extract_hero(doc),
        features: extract_features(doc),
        code_examples: extract_code_examples(doc),
        content: extract_content(doc),
        faq: extract_faq(doc),
    }
}

pub fn tools_page<S: AsRef<str>>(doc: &Document, sources: &[S]) -> ToolsPage {
    ToolsPage {
        meta: extract_meta(doc),
        hero: extract_hero(doc),
        tools: extract_tools(doc, sources),
    }
}

pub fn aso_page(doc: &Document) -> AsoPage {
    AsoPage {
        meta: extract_meta(doc),
        hero: extract_hero(doc),
        content: extract_content(doc),
        faq: extract_faq(doc),
        comp_rows: extract_comparison_rows(doc),
        levels: extract_levels(doc),
    }
}
