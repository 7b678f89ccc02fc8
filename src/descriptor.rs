//! Static block descriptor
//!
//! Pure data the host consumes to render the extension's UI: block
//! identifiers, label text, argument schemas, and the fixed-choice menus.
//! Field names serialize in the host's camelCase convention.

use crate::language::Language;
use crate::messages::MessageCatalog;
use crate::service::Service;
use serde::Serialize;
use std::collections::BTreeMap;

pub const EXTENSION_ID: &str = "betterTranslate";
pub const EXTENSION_COLOR: &str = "#4C97FF";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionInfo {
    pub id: String,
    pub name: String,
    pub color1: String,
    pub blocks: Vec<BlockInfo>,
    pub menus: Menus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub opcode: String,
    pub block_type: BlockType,
    pub text: String,
    pub arguments: BTreeMap<String, ArgumentInfo>,
}

/// Reporter blocks return a value; command blocks only have effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Reporter,
    Command,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentInfo {
    #[serde(rename = "type")]
    pub arg_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
    pub default_value: String,
}

impl ArgumentInfo {
    fn string(default_value: &str) -> Self {
        Self {
            arg_type: "string".to_string(),
            menu: None,
            default_value: default_value.to_string(),
        }
    }

    fn menu(menu: &str, default_value: &str) -> Self {
        Self {
            arg_type: "string".to_string(),
            menu: Some(menu.to_string()),
            default_value: default_value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Menus {
    pub service_menu: MenuInfo,
    pub language_menu: MenuInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuInfo {
    pub items: Vec<String>,
}

/// Build the descriptor with labels resolved through `catalog`
pub fn extension_info(catalog: &MessageCatalog) -> ExtensionInfo {
    let translate_arguments = BTreeMap::from([
        (
            "SERVICE".to_string(),
            ArgumentInfo::menu("serviceMenu", Service::Microsoft.menu_name()),
        ),
        ("TEXT".to_string(), ArgumentInfo::string("Hello World")),
        (
            "FROM".to_string(),
            ArgumentInfo::menu("languageMenu", Language::English.menu_name()),
        ),
        (
            "TO".to_string(),
            ArgumentInfo::menu("languageMenu", Language::SimplifiedChinese.menu_name()),
        ),
    ]);

    let set_api_key_arguments = BTreeMap::from([
        (
            "SERVICE".to_string(),
            ArgumentInfo::menu("serviceMenu", Service::DeepL.menu_name()),
        ),
        ("KEY".to_string(), ArgumentInfo::string("")),
    ]);

    let detect_language_arguments =
        BTreeMap::from([("TEXT".to_string(), ArgumentInfo::string("Hello World"))]);

    ExtensionInfo {
        id: EXTENSION_ID.to_string(),
        name: catalog.format_message("BetterTranslate.extensionName"),
        color1: EXTENSION_COLOR.to_string(),
        blocks: vec![
            BlockInfo {
                opcode: "translate".to_string(),
                block_type: BlockType::Reporter,
                text: catalog.format_message("BetterTranslate.translate"),
                arguments: translate_arguments,
            },
            BlockInfo {
                opcode: "setApiKey".to_string(),
                block_type: BlockType::Command,
                text: catalog.format_message("BetterTranslate.setApiKey"),
                arguments: set_api_key_arguments,
            },
            BlockInfo {
                opcode: "detectLanguage".to_string(),
                block_type: BlockType::Reporter,
                text: catalog.format_message("BetterTranslate.detectLanguage"),
                arguments: detect_language_arguments,
            },
        ],
        menus: Menus {
            service_menu: MenuInfo {
                items: Service::ALL
                    .iter()
                    .map(|s| s.menu_name().to_string())
                    .collect(),
            },
            language_menu: MenuInfo {
                items: Language::ALL
                    .iter()
                    .map(|l| l.menu_name().to_string())
                    .collect(),
            },
        },
    }
}
