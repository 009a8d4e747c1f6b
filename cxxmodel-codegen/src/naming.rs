//! Naming policy for generated models.

/// Template files rendered once per model, with the extension of their output.
pub const MODEL_TEMPLATES: [(&str, &str); 2] = [("header.mustache", ".h"), ("source.mustache", ".cpp")];

/// Prefix for model names that would otherwise be invalid.
const MODEL_PREFIX: &str = "Model";

/// C++ keywords a model name must not collide with.
const CPP_RESERVED_WORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char",
    "class", "const", "constexpr", "continue", "decltype", "default", "delete", "do", "double",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "nullptr",
    "operator", "or", "private", "protected", "public", "register", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "template", "this", "throw", "true", "try",
    "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void",
    "volatile", "while", "xor",
];

/// Turns a schema name into a target-language type name.
///
/// Implementations must be total: every input yields some name.
pub trait NameNormalizer {
    /// Returns the model type name for `name`.
    fn to_model_name(&self, name: &str) -> String;
}

impl<F> NameNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn to_model_name(&self, name: &str) -> String {
        self(name)
    }
}

/// Default C++ naming: PascalCase, identifier-safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppNaming;

impl NameNormalizer for CppNaming {
    fn to_model_name(&self, name: &str) -> String {
        // qualified names are external types, keep them as written
        if name.contains("::") {
            return name.to_string();
        }

        let mut result = String::with_capacity(name.len());
        let mut capitalize_next = true;
        for c in name.chars() {
            if matches!(c, '_' | '-' | '.' | ' ' | '/') {
                capitalize_next = true;
            } else if !c.is_ascii_alphanumeric() {
                result.push('_');
                capitalize_next = false;
            } else if capitalize_next {
                result.push(c.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                result.push(c);
            }
        }

        if result.is_empty() {
            return MODEL_PREFIX.to_string();
        }
        if result.starts_with(|c: char| c.is_ascii_digit()) {
            return escape_model_name(&result);
        }
        result
    }
}

/// Returns true if `name` is a C++ keyword.
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    CPP_RESERVED_WORDS.contains(&name)
}

/// Prefixes a name so it can no longer collide with a keyword or primitive.
#[must_use]
pub fn escape_model_name(name: &str) -> String {
    format!("{MODEL_PREFIX}{}", capitalize(name))
}

/// Returns the file stem of a generated model.
#[must_use]
pub fn to_model_filename(naming: &impl NameNormalizer, name: &str) -> String {
    naming.to_model_name(name)
}

/// Returns the generated file names of a model (header first).
#[must_use]
pub fn model_file_names(naming: &impl NameNormalizer, name: &str) -> Vec<String> {
    let stem = to_model_filename(naming, name);
    MODEL_TEMPLATES
        .iter()
        .map(|(_, extension)| format!("{stem}{extension}"))
        .collect()
}

/// Returns the enum type name for a property.
#[must_use]
pub fn to_enum_name(property_name: &str) -> String {
    capitalize(property_name)
}

/// Escapes double quotes for use inside a C++ string literal.
#[must_use]
pub fn escape_quotation_mark(input: &str) -> String {
    input.replace('"', "\\\"")
}

/// Escapes characters that are unsafe in generated comments.
// TODO: strip "*/" once descriptions are emitted inside block comments
#[must_use]
pub fn escape_unsafe_characters(input: &str) -> String {
    input.to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_model_name() {
        let naming = CppNaming;
        assert_eq!(naming.to_model_name("pet_store"), "PetStore");
        assert_eq!(naming.to_model_name("CustomWidget"), "CustomWidget");
        assert_eq!(naming.to_model_name("order-item.v2"), "OrderItemV2");
        assert_eq!(naming.to_model_name("weird$name"), "Weird_name");
    }

    #[test]
    fn test_to_model_name_keeps_qualified_types() {
        assert_eq!(CppNaming.to_model_name("std::string"), "std::string");
        assert_eq!(CppNaming.to_model_name("::nlohmann::json"), "::nlohmann::json");
    }

    #[test]
    fn test_to_model_name_escapes() {
        assert_eq!(CppNaming.to_model_name("200_response"), "Model200Response");
        assert_eq!(CppNaming.to_model_name(""), "Model");
        assert_eq!(CppNaming.to_model_name("___"), "Model");
    }

    #[test]
    fn test_to_model_name_capitalizes_keywords() {
        assert_eq!(CppNaming.to_model_name("class"), "Class");
        assert_eq!(CppNaming.to_model_name("int"), "Int");
    }

    #[test]
    fn test_to_model_name_is_idempotent() {
        for name in ["pet_store", "a-b-c", "200_ok", "Already"] {
            let once = CppNaming.to_model_name(name);
            assert_eq!(CppNaming.to_model_name(&once), once);
        }
    }

    #[test]
    fn test_closure_normalizer() {
        let upper = |name: &str| name.to_uppercase();
        assert_eq!(upper.to_model_name("pet"), "PET");
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved_word("class"));
        assert!(!is_reserved_word("Class"));
        assert_eq!(escape_model_name("int"), "ModelInt");
    }

    #[test]
    fn test_model_file_names() {
        assert_eq!(
            model_file_names(&CppNaming, "pet_store"),
            ["PetStore.h", "PetStore.cpp"]
        );
        assert_eq!(to_model_filename(&CppNaming, "tag"), "Tag");
    }

    #[test]
    fn test_enum_name_and_escaping() {
        assert_eq!(to_enum_name("status"), "Status");
        assert_eq!(to_enum_name(""), "");
        assert_eq!(escape_quotation_mark(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_unsafe_characters("a < b"), "a < b");
    }
}
