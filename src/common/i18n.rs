// src/common/i18n.rs

// Catálogo de mensagens (en / pt) usado nos avisos e nos erros da API.

use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_LANG: &str = "en";

const EN: &[(&str, &str)] = &[
    ("product.required", "Product ID and name required"),
    ("product.exists", "Product ID already exists"),
    ("product.added", "Product added"),
    ("product.updated", "Product updated"),
    ("product.deleted", "Product {id} deleted successfully"),
    ("product.not_found", "Product {id} not found"),
    ("location.required", "Location ID and name required"),
    ("location.exists", "Location ID already exists"),
    ("location.added", "Location added"),
    ("location.updated", "Location updated"),
    ("location.deleted", "Location {id} deleted successfully"),
    ("location.not_found", "Location {id} not found"),
    (
        "location.in_use",
        "Cannot delete location: it is referenced in a product movement.",
    ),
    ("movement.required", "Product and positive qty required"),
    ("movement.qty_limit", "Qty must be at most 1000000000"),
    ("movement.recorded", "Movement recorded"),
    ("validation.invalid", "One or more fields are invalid."),
    ("error.internal", "An unexpected error occurred."),
];

const PT: &[(&str, &str)] = &[
    ("product.required", "ID e nome do produto são obrigatórios"),
    ("product.exists", "Já existe um produto com este ID"),
    ("product.added", "Produto adicionado"),
    ("product.updated", "Produto atualizado"),
    ("product.deleted", "Produto {id} removido com sucesso"),
    ("product.not_found", "Produto {id} não encontrado"),
    ("location.required", "ID e nome do local são obrigatórios"),
    ("location.exists", "Já existe um local com este ID"),
    ("location.added", "Local adicionado"),
    ("location.updated", "Local atualizado"),
    ("location.deleted", "Local {id} removido com sucesso"),
    ("location.not_found", "Local {id} não encontrado"),
    (
        "location.in_use",
        "Não é possível remover o local: ele é referenciado em uma movimentação.",
    ),
    ("movement.required", "Produto e quantidade positiva são obrigatórios"),
    ("movement.qty_limit", "A quantidade deve ser no máximo 1000000000"),
    ("movement.recorded", "Movimentação registrada"),
    ("validation.invalid", "Um ou mais campos são inválidos."),
    ("error.internal", "Ocorreu um erro inesperado."),
];

#[derive(Clone)]
pub struct I18nStore {
    catalogs: Arc<HashMap<&'static str, HashMap<&'static str, &'static str>>>,
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

impl I18nStore {
    pub fn new() -> Self {
        let mut catalogs: HashMap<&'static str, HashMap<&'static str, &'static str>> =
            HashMap::new();
        catalogs.insert("en", EN.iter().copied().collect());
        catalogs.insert("pt", PT.iter().copied().collect());
        Self {
            catalogs: Arc::new(catalogs),
        }
    }

    /// Idioma desconhecido cai para o inglês; chave desconhecida volta como está.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(DEFAULT_LANG, key))
            .unwrap_or(key)
            .to_string()
    }

    /// Igual a `translate`, substituindo os marcadores `{nome}`.
    pub fn translate_with(&self, lang: &str, key: &str, args: &[(&str, &str)]) -> String {
        let mut message = self.translate(lang, key);
        for (name, value) in args {
            message = message.replace(&format!("{{{name}}}"), value);
        }
        message
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&'static str> {
        self.catalogs.get(lang).and_then(|c| c.get(key)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_and_falls_back() {
        let store = I18nStore::new();

        assert_eq!(store.translate("pt", "product.added"), "Produto adicionado");
        assert_eq!(store.translate("de", "product.added"), "Product added");
        assert_eq!(store.translate("en", "no.such.key"), "no.such.key");
    }

    #[test]
    fn substitutes_placeholders() {
        let store = I18nStore::new();

        assert_eq!(
            store.translate_with("en", "location.deleted", &[("id", "L3")]),
            "Location L3 deleted successfully"
        );
    }

    #[test]
    fn catalogs_have_the_same_keys() {
        let en: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
        let pt: Vec<_> = PT.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, pt);
    }
}
