//! lupdate-style catalog merging.
//!
//! `merge` re-syncs a translated catalog against a freshly extracted
//! template: translations are carried forward for matching (context, source)
//! pairs, entries that disappeared from the template are kept as vanished so
//! no translation work is lost, and new entries come in unfinished.

use std::collections::HashSet;

use super::{Catalog, Context, Message, TS_VERSION, TranslationStatus};

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Drop entries missing from the template instead of marking them
    /// vanished.
    pub no_obsolete: bool,
}

/// Counts of what [`merge`] did, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Entries whose translation was carried over from the old catalog.
    pub carried: usize,
    /// Entries new in the template, emitted unfinished.
    pub added: usize,
    /// Entries missing from the template, kept as vanished (or dropped
    /// with `no_obsolete`).
    pub vanished: usize,
}

/// Merge a translated catalog with a template.
///
/// The template drives structure and location hints (it reflects the current
/// UI sources); the translated catalog contributes translations and the
/// target language. Duplicate sources pair up positionally within a context,
/// so repeated strings keep their individual translations.
pub fn merge(
    template: &Catalog,
    translated: &Catalog,
    options: MergeOptions,
) -> (Catalog, MergeOutcome) {
    let mut outcome = MergeOutcome::default();
    let mut contexts = Vec::with_capacity(template.contexts.len());

    for template_context in &template.contexts {
        let old_context = translated.context(&template_context.name);
        let mut context = Context::new(&template_context.name);
        // Positional cursor per source string, so the n-th duplicate pairs
        // with the n-th duplicate of the old catalog.
        let mut taken: Vec<usize> = Vec::new();

        for template_message in &template_context.messages {
            let old_message = old_context.and_then(|context| {
                context
                    .messages
                    .iter()
                    .enumerate()
                    .find(|(index, m)| {
                        m.source == template_message.source
                            && m.status.is_active()
                            && !taken.contains(index)
                    })
                    .map(|(index, m)| {
                        taken.push(index);
                        m
                    })
            });

            let message = match old_message {
                Some(old) if !old.translation.is_empty() => {
                    outcome.carried += 1;
                    Message {
                        source: template_message.source.clone(),
                        translation: old.translation.clone(),
                        status: old.status,
                        locations: template_message.locations.clone(),
                        line: 0,
                    }
                }
                _ => {
                    outcome.added += 1;
                    Message {
                        source: template_message.source.clone(),
                        translation: String::new(),
                        status: TranslationStatus::Unfinished,
                        locations: template_message.locations.clone(),
                        line: 0,
                    }
                }
            };
            context.messages.push(message);
        }

        // Active entries of the old context that the template no longer has
        if let Some(old_context) = old_context {
            append_vanished(&mut context, old_context, &taken, options, &mut outcome);
        }

        contexts.push(context);
    }

    // Whole contexts that disappeared from the template
    let template_names: HashSet<&str> = template
        .contexts
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    for old_context in &translated.contexts {
        if template_names.contains(old_context.name.as_str()) {
            continue;
        }
        let mut context = Context::new(&old_context.name);
        append_vanished(&mut context, old_context, &[], options, &mut outcome);
        if !context.messages.is_empty() {
            contexts.push(context);
        }
    }

    let catalog = Catalog {
        version: TS_VERSION.to_string(),
        language: translated.language.clone().or_else(|| template.language.clone()),
        contexts,
    };
    (catalog, outcome)
}

fn append_vanished(
    context: &mut Context,
    old_context: &Context,
    taken: &[usize],
    options: MergeOptions,
    outcome: &mut MergeOutcome,
) {
    for (index, old) in old_context.messages.iter().enumerate() {
        if taken.contains(&index) || !old.status.is_active() {
            continue;
        }
        outcome.vanished += 1;
        if options.no_obsolete {
            continue;
        }
        context.messages.push(Message {
            source: old.source.clone(),
            translation: old.translation.clone(),
            status: TranslationStatus::Vanished,
            locations: Vec::new(),
            line: 0,
        });
    }
}
