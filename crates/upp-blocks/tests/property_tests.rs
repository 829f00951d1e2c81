use proptest::prelude::*;
use upp_blocks::{TransformOptions, transform_code};

proptest! {
    #[test]
    fn test_transform_is_idempotent(
        before in "[a-z <>/\n]{0,40}",
        after in "[a-z <>/\n]{0,40}",
        name in "[a-zA-Z]{1,12}",
    ) {
        let code = format!("{before}<project-private>{{ name: '{name}' }}</project-private>{after}");
        let first = transform_code(&code, "pages/p", TransformOptions::default()).unwrap();
        let second = transform_code(&first.content, "pages/p", TransformOptions::default()).unwrap();

        prop_assert!(!second.changed);
        prop_assert_eq!(second.content, first.content);
    }

    #[test]
    fn test_text_without_blocks_untouched(code in "[^<]{0,80}") {
        let result = transform_code(&code, "pages/p", TransformOptions::default()).unwrap();
        prop_assert!(!result.changed);
        prop_assert_eq!(result.content, code);
    }
}
