use crate::error::{AppError, AppResult, FileError};
use crate::models::question::ParsedQuestion;
use std::path::Path;
use tokio::fs;

/// 从 JSON 文件加载题目列表（例如已分类的参考题库）
pub async fn load_questions_json(json_file_path: &Path) -> AppResult<Vec<ParsedQuestion>> {
    let path = json_file_path.display().to_string();

    let content = fs::read_to_string(json_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path, e))?;

    let questions: Vec<ParsedQuestion> = serde_json::from_str(&content)
        .map_err(|source| FileError::JsonParseFailed { path, source })?;

    tracing::info!(
        "成功加载 {} 个题目: {}",
        questions.len(),
        json_file_path.display()
    );

    Ok(questions)
}

/// 将题目列表写入 JSON 文件（带缩进）
pub async fn save_questions_json(
    json_file_path: &Path,
    questions: &[ParsedQuestion],
) -> AppResult<()> {
    let path = json_file_path.display().to_string();

    let content = serde_json::to_string_pretty(questions).map_err(|source| {
        FileError::JsonParseFailed {
            path: path.clone(),
            source,
        }
    })?;

    if let Some(parent) = json_file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::file_write_failed(&path, e))?;
        }
    }

    fs::write(json_file_path, content)
        .await
        .map_err(|e| AppError::file_write_failed(&path, e))?;

    tracing::info!("已写入 {} 个题目到 {}", questions.len(), path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_error() {
        let path = std::env::temp_dir().join("lawmaster_missing_reference.json");
        let result = tokio_test::block_on(load_questions_json(&path));
        assert!(matches!(result, Err(AppError::File(FileError::ReadFailed { .. }))));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "lawmaster_json_loader_{}.json",
            std::process::id()
        ));
        let questions = vec![ParsedQuestion::new(
            3,
            "Prompt",
            vec!["A. x".to_string(), "B. y".to_string()],
            1,
            None,
        )
        .with_category("Luật Dân sự")];

        tokio_test::block_on(save_questions_json(&path, &questions)).unwrap();
        let loaded = tokio_test::block_on(load_questions_json(&path)).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, questions);
    }

    #[test]
    fn test_load_repairs_invalid_records() {
        let path = std::env::temp_dir().join(format!(
            "lawmaster_json_loader_invalid_{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"[{"id":1,"category":"Luật Dân sự","question":"P","options":[],"correctAnswer":7}]"#,
        )
        .unwrap();

        let loaded = tokio_test::block_on(load_questions_json(&path)).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded[0].options(),
            ["A. Đáp án 1", "B. Đáp án 2", "C. Đáp án 3", "D. Đáp án 4"]
        );
        assert_eq!(loaded[0].correct_answer_index(), 3);
        assert_eq!(loaded[0].category(), "Luật Dân sự");
    }
}
