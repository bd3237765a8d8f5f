use proptest::prelude::*;
use script_obfuscator::obfuscator::Obfuscator;
use script_obfuscator::token::{TokenGenerator, TOKEN_FENCE};

const PROPTEST_CASES: u32 = 100;

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{2,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn prop_non_eligible_words_survive(word in identifier_strategy()) {
        let mut obfuscator = Obfuscator::new(Vec::new());
        let text = format!("{}(1, 2);", word);
        let out = obfuscator.obfuscate_text(&text);

        prop_assert!(out.contains(&word));
        prop_assert!(obfuscator.mapping().is_empty());
        prop_assert!(obfuscator.used_words().is_empty());
    }

    #[test]
    fn prop_same_word_same_token_across_texts(word in identifier_strategy()) {
        let mut obfuscator = Obfuscator::new(vec![word.clone()]);
        let first = obfuscator.obfuscate_text(&format!("{}();", word));
        let second = obfuscator.obfuscate_text(&format!("var x = {};", word));

        let token = obfuscator.mapping().get(&word).cloned();
        prop_assert!(token.is_some());
        let token = token.unwrap();
        prop_assert!(first.contains(&token));
        prop_assert!(second.contains(&token));
        prop_assert_eq!(obfuscator.mapping().len(), 1);
    }

    #[test]
    fn prop_token_structure_holds_for_any_counter(advance in 0usize..512) {
        let mut generator = TokenGenerator::new();
        for _ in 0..advance {
            generator.next_token();
        }
        let token = generator.next_token();

        prop_assert_eq!(token.len(), 68);
        prop_assert!(token.starts_with(TOKEN_FENCE));
        prop_assert!(token.ends_with(TOKEN_FENCE));
        let core = &token[TOKEN_FENCE.len()..token.len() - TOKEN_FENCE.len()];
        prop_assert!(core.chars().all(|c| c == '_' || c == '$'));
    }

    #[test]
    fn prop_string_contents_survive_collapse(
        left in "[a-z]{1,8}",
        right in "[a-z]{1,8}",
        gap in "[ \t]{1,5}",
    ) {
        let mut obfuscator = Obfuscator::new(Vec::new());
        let text = format!("var s = \"{}{}{}\";", left, gap, right);
        let out = obfuscator.obfuscate_text(&text);

        let expected = format!("var s = \"{} {}\";", left, right);
        prop_assert!(out.ends_with(&expected));
    }
}
