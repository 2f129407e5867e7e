use syn::{
    Attribute, Ident, LitStr, Meta, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Name of the field attribute.
pub const ATTR: &str = "validate";

const KEY_RULES: &str = "rules";
const KEY_NAME: &str = "name";

/// Parsed `#[validate(...)]` arguments of one field.
#[derive(Debug, Clone, Default)]
pub struct FieldAttrs {
    /// The rule tag, from `"..."` or `rules = "..."`.
    pub rules: Option<LitStr>,
    /// Field name override, from `name = "..."`.
    pub name: Option<LitStr>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
enum AttrItem {
    /// A bare string like `"min:18|max:50"`
    Tag(LitStr),
    /// Key-value pair like `name = "Age"`
    KeyValue { key: Ident, value: LitStr },
}

impl FieldAttrs {
    fn set_rules(&mut self, value: LitStr) -> Result<()> {
        if self.rules.is_some() {
            return Err(diag::error_spanned(
                &value,
                "duplicate rule tag; write all rules in one tag joined with `|`",
            ));
        }
        self.rules = Some(value);
        Ok(())
    }

    fn set_name(&mut self, value: LitStr) -> Result<()> {
        if self.name.is_some() {
            return Err(diag::error_spanned(&value, "duplicate `name`"));
        }
        if value.value().is_empty() {
            return Err(diag::error_spanned(&value, "`name` cannot be empty"));
        }
        self.name = Some(value);
        Ok(())
    }

    fn apply(&mut self, item: AttrItem) -> Result<()> {
        match item {
            AttrItem::Tag(value) => self.set_rules(value),
            AttrItem::KeyValue { key, value } if key == KEY_RULES => self.set_rules(value),
            AttrItem::KeyValue { key, value } if key == KEY_NAME => self.set_name(value),
            AttrItem::KeyValue { key, .. } => Err(diag::error_spanned(
                &key,
                format!("unknown `{ATTR}` key `{key}`, expected `{KEY_RULES}` or `{KEY_NAME}`"),
            )),
        }
    }
}

/// Parse one `#[validate(...)]` attribute; `None` for other attributes.
fn parse_attr(attr: &Attribute) -> Result<Option<Vec<AttrItem>>> {
    if !attr.path().is_ident(ATTR) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::Path(_) | Meta::NameValue(_) => Err(diag::error_spanned(
            attr,
            format!("expected #[{ATTR}(\"rule:condition\")] or #[{ATTR}({KEY_RULES} = \"...\")]"),
        )),
    }
}

/// Parse and merge all `#[validate(...)]` attributes of a field.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs> {
    let mut result = FieldAttrs::default();

    for attr in attrs {
        if let Some(items) = parse_attr(attr)? {
            for item in items {
                result.apply(item)?;
            }
        }
    }

    Ok(result)
}

struct AttrArgsParser(Vec<AttrItem>);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
            .into_iter()
            .map(|x| x.0)
            .collect();
        Ok(Self(items))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self(AttrItem::Tag(input.parse()?)));
        }

        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value: LitStr = input.parse()?;
        Ok(Self(AttrItem::KeyValue { key, value }))
    }
}
