use serde::Deserialize;

/// One news item as served by the articles endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Article {
    pub image: String,
    pub title: String,
    pub summary: String,
    pub url: String,
}

/// Parses the endpoint body. Order is kept and duplicates are not collapsed.
pub fn parse_articles(body: &str) -> Result<Vec<Article>, serde_json::Error> {
    serde_json::from_str::<Vec<Article>>(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_response_order_and_duplicates() {
        let body = r#"[
            {"image":"https://img/1.jpg","title":"Carlsen wins","summary":"s1","url":"https://news/1"},
            {"image":"https://img/2.jpg","title":"Candidates recap","summary":"s2","url":"https://news/2"},
            {"image":"https://img/1.jpg","title":"Carlsen wins","summary":"s1","url":"https://news/1"}
        ]"#;

        let articles = parse_articles(body).unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].title, "Carlsen wins");
        assert_eq!(articles[1].url, "https://news/2");
        assert_eq!(articles[0], articles[2]);
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"[{"image":"i","title":"t","summary":"s","url":"u","author":"x"}]"#;
        let articles = parse_articles(body).unwrap();
        assert_eq!(articles[0].summary, "s");
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_articles("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_bodies() {
        assert!(parse_articles("<html>502</html>").is_err());
        assert!(parse_articles(r#"{"articles":[]}"#).is_err());
        assert!(parse_articles(r#"[{"title":"no url"}]"#).is_err());
    }
}
