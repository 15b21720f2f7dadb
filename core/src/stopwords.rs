use lazy_static::lazy_static;
use std::collections::HashSet;

/// Decides whether a normalized, lower-cased word carries no indexing value.
pub trait StopwordClassifier {
    fn is_stopword(&self, word: &str, language: &str) -> bool;
}

lazy_static! {
    static ref ENGLISH: HashSet<&'static str> = {
        let words: &[&str] = &[
            "i","me","my","myself","we","our","ours","ourselves","you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
            "he","him","his","himself","she","she's","her","hers","herself","it","it's","its","itself",
            "they","them","their","theirs","themselves","what","which","who","whom","this","that","that'll","these","those",
            "am","is","are","was","were","be","been","being","have","has","had","having","do","does","did","doing",
            "a","an","the","and","but","if","or","because","as","until","while","of","at","by","for","with","about",
            "against","between","into","through","during","before","after","above","below","to","from","up","down",
            "in","out","on","off","over","under","again","further","then","once","here","there","when","where","why",
            "how","all","any","both","each","few","more","most","other","some","such","no","nor","not","only","own",
            "same","so","than","too","very","s","t","can","will","just","don","don't","should","should've","now",
            "d","ll","m","o","re","ve","y","ain","aren","aren't","couldn","couldn't","didn","didn't","doesn","doesn't",
            "hadn","hadn't","hasn","hasn't","haven","haven't","isn","isn't","ma","mightn","mightn't","mustn","mustn't",
            "needn","needn't","shan","shan't","shouldn","shouldn't","wasn","wasn't","weren","weren't","won","won't",
            "wouldn","wouldn't"
        ];
        words.iter().copied().collect()
    };
}

/// The standard English stopword list. Any other language classifies nothing as a stopword.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishStopwords;

impl StopwordClassifier for EnglishStopwords {
    fn is_stopword(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case("english") && ENGLISH.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list() {
        let sw = EnglishStopwords;
        for w in ["the", "is", "a", "of", "don"] {
            assert!(sw.is_stopword(w, "english"), "{w}");
        }
        for w in ["god", "thunder", "thor", "mischief"] {
            assert!(!sw.is_stopword(w, "english"), "{w}");
        }
    }

    #[test]
    fn other_languages_keep_everything() {
        assert!(!EnglishStopwords.is_stopword("the", "french"));
    }
}
