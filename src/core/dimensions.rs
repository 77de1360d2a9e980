use serde::{Deserialize, Serialize};

use crate::core::case_record::deserialize_list;

/// One of the nine Osborn checklist categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// 他用: other uses
    Ta,
    /// 借用: borrow from elsewhere
    Jie,
    /// 改变: change form or rules
    Gai,
    /// 扩大: enlarge
    Kuo,
    /// 缩小: reduce, simplify
    Suo,
    /// 替代: substitute
    Ti,
    /// 调整: rearrange
    Tiao,
    /// 颠倒: reverse
    Dao,
    /// 合并: combine
    He,
}

impl Dimension {
    /// All dimensions in checklist order
    pub const ALL: [Dimension; 9] = [
        Dimension::Ta,
        Dimension::Jie,
        Dimension::Gai,
        Dimension::Kuo,
        Dimension::Suo,
        Dimension::Ti,
        Dimension::Tiao,
        Dimension::Dao,
        Dimension::He,
    ];

    /// Document key
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Ta => "ta",
            Dimension::Jie => "jie",
            Dimension::Gai => "gai",
            Dimension::Kuo => "kuo",
            Dimension::Suo => "suo",
            Dimension::Ti => "ti",
            Dimension::Tiao => "tiao",
            Dimension::Dao => "dao",
            Dimension::He => "he",
        }
    }

    /// Display title
    pub fn title(self) -> &'static str {
        match self {
            Dimension::Ta => "他用",
            Dimension::Jie => "借用",
            Dimension::Gai => "改变",
            Dimension::Kuo => "扩大",
            Dimension::Suo => "缩小",
            Dimension::Ti => "替代",
            Dimension::Tiao => "调整",
            Dimension::Dao => "颠倒",
            Dimension::He => "合并",
        }
    }

    /// What the dimension asks of a topic
    pub fn description(self) -> &'static str {
        match self {
            Dimension::Ta => "探索其他用途和应用场景",
            Dimension::Jie => "借鉴其他领域的做法和原理",
            Dimension::Gai => "改变形态、流程、规则或属性",
            Dimension::Kuo => "扩大规模、功能、影响范围",
            Dimension::Suo => "简化、专注核心功能、便携化",
            Dimension::Ti => "替代材料、方法、技术或流程",
            Dimension::Tiao => "调整顺序、结构、流程或时间",
            Dimension::Dao => "颠倒关系、反转思维、逆向操作",
            Dimension::He => "合并、组合、联动、集成",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

/// Suggestion lists keyed by dimension.
///
/// Missing keys decode as empty lists and unknown keys are ignored, so a
/// partially filled document still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NineDimensions {
    #[serde(default, deserialize_with = "deserialize_list")]
    pub ta: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub jie: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub gai: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub kuo: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub suo: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub ti: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub tiao: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub dao: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub he: Vec<String>,
}

impl NineDimensions {
    pub fn get(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Ta => &self.ta,
            Dimension::Jie => &self.jie,
            Dimension::Gai => &self.gai,
            Dimension::Kuo => &self.kuo,
            Dimension::Suo => &self.suo,
            Dimension::Ti => &self.ti,
            Dimension::Tiao => &self.tiao,
            Dimension::Dao => &self.dao,
            Dimension::He => &self.he,
        }
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut Vec<String> {
        match dimension {
            Dimension::Ta => &mut self.ta,
            Dimension::Jie => &mut self.jie,
            Dimension::Gai => &mut self.gai,
            Dimension::Kuo => &mut self.kuo,
            Dimension::Suo => &mut self.suo,
            Dimension::Ti => &mut self.ti,
            Dimension::Tiao => &mut self.tiao,
            Dimension::Dao => &mut self.dao,
            Dimension::He => &mut self.he,
        }
    }

    pub fn set(&mut self, dimension: Dimension, suggestions: Vec<String>) {
        *self.get_mut(dimension) = suggestions;
    }

    /// Iterate dimensions in checklist order with their suggestions
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &[String])> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// True when no dimension has any suggestion
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, suggestions)| suggestions.is_empty())
    }

    /// Apply `f` to every suggestion, keeping order
    pub fn map_suggestions(&self, mut f: impl FnMut(&str) -> String) -> Self {
        let mut mapped = Self::default();
        for (dimension, suggestions) in self.iter() {
            mapped.set(dimension, suggestions.iter().map(|s| f(s)).collect());
        }
        mapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_keys_round_trip() {
        for dimension in Dimension::ALL {
            assert_eq!(Dimension::from_key(dimension.key()), Some(dimension));
        }
        assert_eq!(Dimension::from_key("unknown"), None);
    }

    #[test]
    fn test_partial_document_decodes() {
        let dims: NineDimensions = serde_json::from_str(
            r#"{"ta": ["a", "b"], "he": null, "extra": ["ignored"]}"#,
        )
        .unwrap();

        assert_eq!(dims.get(Dimension::Ta), ["a", "b"]);
        assert!(dims.get(Dimension::He).is_empty());
        assert!(dims.get(Dimension::Kuo).is_empty());
        assert!(!dims.is_empty());
    }

    #[test]
    fn test_iter_follows_checklist_order() {
        let dims = NineDimensions::default();
        let order: Vec<&str> = dims.iter().map(|(d, _)| d.key()).collect();
        assert_eq!(order, ["ta", "jie", "gai", "kuo", "suo", "ti", "tiao", "dao", "he"]);
    }

    #[test]
    fn test_map_suggestions() {
        let mut dims = NineDimensions::default();
        dims.set(Dimension::Dao, vec!["x".to_string()]);

        let mapped = dims.map_suggestions(|s| format!("{}!", s));
        assert_eq!(mapped.get(Dimension::Dao), ["x!"]);
        assert!(mapped.get(Dimension::Ta).is_empty());
    }
}
