use crate::catalog::Catalog;
use crate::error::{IndexError, Result};
use crate::index::PostingsTable;
use crate::tokenizer::prepare_hero_name;
use crate::vocabulary::Vocabulary;

/// Names of the documents whose postings carry `hero`, in postings order.
///
/// The name is prepared exactly like the hero-name term at indexing time. A name that was never
/// indexed yields [`IndexError::NotFound`]; any other error means the tables disagree with each other.
pub fn search<'c>(
    postings: &PostingsTable,
    vocabulary: &Vocabulary,
    catalog: &'c Catalog,
    hero: &str,
) -> Result<Vec<&'c str>> {
    let term = prepare_hero_name(hero);
    let term_id = vocabulary
        .get(&term)
        .ok_or_else(|| IndexError::NotFound { hero: hero.to_string() })?;
    let doc_ids = postings
        .get(term_id)
        .ok_or_else(|| IndexError::lookup("postings", term_id))?;
    doc_ids.iter().map(|&id| catalog.name_of(id)).collect()
}

/// Like [`search`], but an unknown hero is an empty result.
pub fn search_or_empty<'c>(
    postings: &PostingsTable,
    vocabulary: &Vocabulary,
    catalog: &'c Catalog,
    hero: &str,
) -> Result<Vec<&'c str>> {
    match search(postings, vocabulary, catalog, hero) {
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn tables() -> (PostingsTable, Vocabulary, Catalog) {
        let catalog = Catalog::from_names(Path::new("docs"), ["A.html", "B.html", "C.html"]);
        let mut vocabulary = Vocabulary::new();
        let spidey = vocabulary.insert("spiderman");
        let god = vocabulary.insert("god");
        vocabulary.insert("orphan");
        let mut postings = PostingsTable::base(&vocabulary);
        postings.add(spidey, 2).unwrap();
        postings.add(god, 1).unwrap();
        postings.add(god, 0).unwrap();
        (postings, vocabulary, catalog)
    }

    #[test]
    fn annotated_names_resolve() {
        let (p, v, c) = tables();
        assert_eq!(search(&p, &v, &c, "Spider-Man (Peter Parker)").unwrap(), vec!["C.html"]);
        assert_eq!(search(&p, &v, &c, "spider man [Earth-616]").unwrap(), vec!["C.html"]);
    }

    #[test]
    fn results_keep_postings_order() {
        let (p, v, c) = tables();
        assert_eq!(search(&p, &v, &c, "God").unwrap(), vec!["B.html", "A.html"]);
    }

    #[test]
    fn indexed_term_without_documents_is_empty() {
        let (p, v, c) = tables();
        assert!(search(&p, &v, &c, "Orphan").unwrap().is_empty());
    }

    #[test]
    fn nameless_hero_matches_the_empty_term() {
        let c = Catalog::from_names(Path::new("docs"), ["A.html", "B.html"]);
        let mut v = Vocabulary::new();
        let nameless = v.insert("");
        let mut p = PostingsTable::base(&v);
        p.add(nameless, 1).unwrap();
        assert_eq!(search(&p, &v, &c, "(Earth-616)").unwrap(), vec!["B.html"]);
        assert_eq!(search(&p, &v, &c, "[Unknown]").unwrap(), vec!["B.html"]);
    }

    #[test]
    fn unknown_hero_is_not_found() {
        let (p, v, c) = tables();
        assert!(search(&p, &v, &c, "Galactus").unwrap_err().is_not_found());
        assert!(search(&p, &v, &c, "(Earth-616)").unwrap_err().is_not_found());
        assert!(search_or_empty(&p, &v, &c, "Galactus").unwrap().is_empty());
    }
}
