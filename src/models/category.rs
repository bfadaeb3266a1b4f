use phf::phf_map;

/// 题库主题分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// 国家理论
    StateTheory,
    /// 法律理论
    LawTheory,
    /// 法律规范与法律关系
    Norms,
    /// 民法
    CivilLaw,
    /// 法律的制定与适用
    Legislation,
    /// 违法与法律责任
    Responsibility,
}

/// 名称（含旧版简称）到分类的映射
static CATEGORY_NAMES: phf::Map<&'static str, Category> = phf_map! {
    "Lý luận về Nhà nước" => Category::StateTheory,
    "Lý luận về Pháp luật" => Category::LawTheory,
    "Quy phạm và Quan hệ pháp luật" => Category::Norms,
    "Quy phạm & Quan hệ PL" => Category::Norms,
    "Luật Dân sự" => Category::CivilLaw,
    "Xây dựng và Áp dụng pháp luật" => Category::Legislation,
    "Xây dựng & Áp dụng PL" => Category::Legislation,
    "Vi phạm và Trách nhiệm pháp luật" => Category::Responsibility,
    "Vi phạm & Trách nhiệm PL" => Category::Responsibility,
};

impl Category {
    pub const ALL: [Category; 6] = [
        Category::StateTheory,
        Category::LawTheory,
        Category::Norms,
        Category::CivilLaw,
        Category::Legislation,
        Category::Responsibility,
    ];

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Category::StateTheory => "Lý luận về Nhà nước",
            Category::LawTheory => "Lý luận về Pháp luật",
            Category::Norms => "Quy phạm và Quan hệ pháp luật",
            Category::CivilLaw => "Luật Dân sự",
            Category::Legislation => "Xây dựng và Áp dụng pháp luật",
            Category::Responsibility => "Vi phạm và Trách nhiệm pháp luật",
        }
    }

    /// 分类覆盖的题号范围（闭区间）
    pub fn id_range(self) -> (u32, u32) {
        match self {
            Category::StateTheory => (1, 50),
            Category::LawTheory => (51, 100),
            Category::Norms => (101, 150),
            Category::CivilLaw => (151, 210),
            Category::Legislation => (211, 255),
            Category::Responsibility => (256, 300),
        }
    }

    /// 按题号查找分类
    pub fn from_question_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| {
            let (lo, hi) = c.id_range();
            (lo..=hi).contains(&id)
        })
    }

    /// 从名称解析分类（支持简称，忽略首尾空白）
    pub fn from_name(name: &str) -> Option<Self> {
        CATEGORY_NAMES.get(name.trim()).copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_question_id_boundaries() {
        assert_eq!(Category::from_question_id(0), None);
        assert_eq!(Category::from_question_id(1), Some(Category::StateTheory));
        assert_eq!(Category::from_question_id(50), Some(Category::StateTheory));
        assert_eq!(Category::from_question_id(51), Some(Category::LawTheory));
        assert_eq!(Category::from_question_id(210), Some(Category::CivilLaw));
        assert_eq!(Category::from_question_id(211), Some(Category::Legislation));
        assert_eq!(Category::from_question_id(300), Some(Category::Responsibility));
        assert_eq!(Category::from_question_id(301), None);
    }

    #[test]
    fn test_from_name_accepts_short_aliases() {
        assert_eq!(
            Category::from_name("Quy phạm & Quan hệ PL"),
            Some(Category::Norms)
        );
        assert_eq!(Category::from_name(" Luật Dân sự "), Some(Category::CivilLaw));
        assert_eq!(Category::from_name("Hình sự"), None);
    }

    #[test]
    fn test_every_canonical_name_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }
}
