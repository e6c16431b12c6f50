//! Parameter classification.
//!
//! Each declared argument lands in exactly one bucket. For classes the
//! docstring "Parameters" block documents instance attributes, so every
//! argument is routed to the attributes section whatever its flags say.

use crate::model::{description_or_placeholder, ParameterDescriptor, SymbolDescriptor};
use crate::section::Row;

/// Destination section of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Args,
    Kwargs,
    Properties,
}

/// Rows per bucket, each in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub args: Vec<Row>,
    pub kwargs: Vec<Row>,
    pub properties_from_args: Vec<Row>,
}

/// The routing rule: class context first, then keyword-only, else positional.
pub fn bucket(is_class: bool, param: &ParameterDescriptor) -> Bucket {
    if is_class {
        Bucket::Properties
    } else if param.is_kwarg_only {
        Bucket::Kwargs
    } else {
        Bucket::Args
    }
}

pub fn classify(descriptor: &SymbolDescriptor) -> Classified {
    let mut classified = Classified::default();
    for param in &descriptor.args {
        let row = parameter_row(param);
        match bucket(descriptor.is_class, param) {
            Bucket::Args => classified.args.push(row),
            Bucket::Kwargs => classified.kwargs.push(row),
            Bucket::Properties => classified.properties_from_args.push(row),
        }
    }
    classified
}

/// Required parameters get an emphasized name; optional ones do not.
pub fn parameter_row(param: &ParameterDescriptor) -> Row {
    let name = if param.is_optional {
        param.name.clone()
    } else {
        format!("<span class='bold'>{}</span>", param.name)
    };
    Row {
        title: format!(
            "<p>{} <span class='italic code'>({})</span></p>",
            name, param.type_name
        ),
        body: description_or_placeholder(param.description.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NO_DESCRIPTION;

    fn param(name: &str, optional: bool, kwarg_only: bool) -> ParameterDescriptor {
        ParameterDescriptor {
            name: name.into(),
            type_name: "str".into(),
            description: Some(format!("<p>{}</p>", name)),
            is_optional: optional,
            is_kwarg_only: kwarg_only,
        }
    }

    fn function(args: Vec<ParameterDescriptor>) -> SymbolDescriptor {
        SymbolDescriptor {
            name: "text_input".into(),
            args,
            ..Default::default()
        }
    }

    #[test]
    fn positional_and_keyword_split() {
        let desc = function(vec![
            param("label", false, false),
            param("value", true, false),
            param("key", true, true),
            param("on_change", false, true),
        ]);
        let c = classify(&desc);
        assert_eq!(c.args.len(), 2);
        assert_eq!(c.kwargs.len(), 2);
        assert!(c.properties_from_args.is_empty());
        assert!(c.args[0].body.contains("label"));
        assert!(c.args[1].body.contains("value"));
        assert!(c.kwargs[0].body.contains("key"));
        assert!(c.kwargs[1].body.contains("on_change"));
    }

    #[test]
    fn class_arguments_all_become_attributes() {
        let mut desc = function(vec![
            param("label", false, false),
            param("width", true, false),
            param("key", true, true),
            param("help", false, true),
        ]);
        desc.is_class = true;
        let c = classify(&desc);
        assert!(c.args.is_empty());
        assert!(c.kwargs.is_empty());
        assert_eq!(c.properties_from_args.len(), 4);
        let order: Vec<_> = c.properties_from_args.iter().map(|r| r.body.as_str()).collect();
        assert_eq!(order, ["<p>label</p>", "<p>width</p>", "<p>key</p>", "<p>help</p>"]);
    }

    #[test]
    fn bucket_rule_ignores_flags_for_classes() {
        for (optional, kwarg_only) in [(false, false), (true, false), (false, true), (true, true)] {
            assert_eq!(bucket(true, &param("x", optional, kwarg_only)), Bucket::Properties);
        }
        assert_eq!(bucket(false, &param("x", true, true)), Bucket::Kwargs);
        assert_eq!(bucket(false, &param("x", true, false)), Bucket::Args);
    }

    #[test]
    fn required_title_is_bold() {
        let row = parameter_row(&param("label", false, false));
        assert_eq!(
            row.title,
            "<p><span class='bold'>label</span> <span class='italic code'>(str)</span></p>"
        );
    }

    #[test]
    fn optional_title_is_plain() {
        let row = parameter_row(&param("value", true, false));
        assert_eq!(row.title, "<p>value <span class='italic code'>(str)</span></p>");
    }

    #[test]
    fn missing_description_is_placeholder() {
        let mut p = param("label", false, false);
        p.description = None;
        assert_eq!(parameter_row(&p).body, NO_DESCRIPTION);
    }
}
