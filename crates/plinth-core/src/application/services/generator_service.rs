//! Generator invocation service.
//!
//! The main application-layer use case: resolve a generator by name, collect
//! its answers through the [`AnswerProvider`] port, and drive the action
//! pipeline.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::application::error::ApplicationError;
use crate::application::pipeline;
use crate::application::ports::{AnswerProvider, Filesystem, TemplateRenderer};
use crate::application::services::registry::{GeneratorInfo, GeneratorRegistry};
use crate::domain::{AnswerSet, AnswerValue, DomainError, EmittedFile, GeneratorSpec, PromptKind};
use crate::error::PlinthResult;

/// Orchestrates generator invocations over injected ports.
pub struct GeneratorService {
    registry: GeneratorRegistry,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GeneratorService {
    pub fn new(
        registry: GeneratorRegistry,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            registry,
            renderer,
            filesystem,
        }
    }

    /// Summaries of all registered generators, in registration order.
    pub fn list(&self) -> Vec<GeneratorInfo> {
        self.registry.list()
    }

    /// Invoke a generator by name, writing its files under `output_root`.
    #[instrument(skip(self, provider), fields(generator = name))]
    pub fn invoke(
        &self,
        name: &str,
        provider: &dyn AnswerProvider,
        output_root: &Path,
    ) -> PlinthResult<Vec<EmittedFile>> {
        self.run(name, provider, output_root, false)
    }

    /// Like [`invoke`](Self::invoke), but computes paths and content without
    /// writing anything.
    #[instrument(skip(self, provider), fields(generator = name))]
    pub fn preview(
        &self,
        name: &str,
        provider: &dyn AnswerProvider,
        output_root: &Path,
    ) -> PlinthResult<Vec<EmittedFile>> {
        self.run(name, provider, output_root, true)
    }

    fn run(
        &self,
        name: &str,
        provider: &dyn AnswerProvider,
        output_root: &Path,
        dry_run: bool,
    ) -> PlinthResult<Vec<EmittedFile>> {
        let spec = self
            .registry
            .get(name)
            .ok_or_else(|| DomainError::UnknownGenerator {
                name: name.to_string(),
            })?;

        let answers = collect_answers(spec, provider)?;
        debug!(prompts = spec.prompts.len(), "Collected answers");

        let emitted = pipeline::run(
            spec,
            &answers,
            self.renderer.as_ref(),
            self.filesystem.as_ref(),
            output_root,
            dry_run,
        )?;

        info!(files = emitted.len(), "Generator finished");
        Ok(emitted)
    }
}

/// Ask the provider for each prompt in declared order, falling back to the
/// prompt's default when no answer is given.
fn collect_answers(
    spec: &GeneratorSpec,
    provider: &dyn AnswerProvider,
) -> PlinthResult<AnswerSet> {
    let mut answers = AnswerSet::new();

    for prompt in &spec.prompts {
        let value = match provider.provide(prompt)? {
            Some(value) => {
                check_kind(&prompt.name, prompt.kind, &value)?;
                value
            }
            None => match &prompt.default {
                Some(default) => default.clone(),
                None => {
                    return Err(ApplicationError::MissingAnswer {
                        generator: spec.name.clone(),
                        prompt: prompt.name.clone(),
                    }
                    .into());
                }
            },
        };
        answers.insert(prompt.name.clone(), value);
    }

    Ok(answers)
}

fn check_kind(prompt: &str, kind: PromptKind, value: &AnswerValue) -> PlinthResult<()> {
    let matches = match kind {
        PromptKind::Text => matches!(value, AnswerValue::Text(_)),
        PromptKind::Confirm => matches!(value, AnswerValue::Flag(_)),
    };
    if matches {
        Ok(())
    } else {
        Err(ApplicationError::InvalidAnswer {
            prompt: prompt.to_string(),
            reason: match kind {
                PromptKind::Text => "expected text".into(),
                PromptKind::Confirm => "expected true or false".into(),
            },
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActionSpec, Predicate, PromptSpec, RenderContext, TemplateId};
    use crate::error::PlinthError;
    use std::collections::HashMap;

    /// Renderer that echoes a fixed body per template id.
    struct EchoRenderer;

    impl TemplateRenderer for EchoRenderer {
        fn render(&self, template: &TemplateId, context: &RenderContext) -> PlinthResult<String> {
            Ok(context.render(&format!("// {} for {{{{NAME_PASCAL}}}}", template.0)))
        }
    }

    /// Quiet filesystem double for service-level tests.
    struct NullFs;

    impl Filesystem for NullFs {
        fn create_dir_all(&self, _path: &Path) -> PlinthResult<()> {
            Ok(())
        }
        fn write_file(&self, _path: &Path, _content: &str) -> PlinthResult<()> {
            Ok(())
        }
        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    /// Provider backed by a map; unmapped prompts yield no answer.
    struct MapProvider(HashMap<&'static str, AnswerValue>);

    impl AnswerProvider for MapProvider {
        fn provide(&self, prompt: &PromptSpec) -> PlinthResult<Option<AnswerValue>> {
            Ok(self.0.get(prompt.name.as_str()).cloned())
        }
    }

    fn service() -> GeneratorService {
        let mut registry = GeneratorRegistry::new();
        registry
            .register(
                GeneratorSpec::builder()
                    .name("entity")
                    .description("Create entity")
                    .prompt(PromptSpec::text("name", "Entity name:"))
                    .prompt(PromptSpec::confirm("with_dto", "Generate a DTO?", false))
                    .action(ActionSpec::add(
                        "src/domain/entities/{{NAME_PASCAL}}.ts",
                        TemplateId("entity"),
                    ))
                    .action(ActionSpec::conditional(
                        "src/application/dto/{{NAME_PASCAL}}DTO.ts",
                        TemplateId("dto"),
                        Predicate::flag_is_true("with_dto"),
                    ))
                    .build()
                    .unwrap(),
            )
            .unwrap();
        GeneratorService::new(registry, Box::new(EchoRenderer), Box::new(NullFs))
    }

    #[test]
    fn invoke_resolves_generator_and_emits() {
        let svc = service();
        let provider = MapProvider(
            [
                ("name", AnswerValue::Text("user".into())),
                ("with_dto", AnswerValue::Flag(true)),
            ]
            .into(),
        );

        let emitted = svc.invoke("entity", &provider, Path::new("out")).unwrap();
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].content, "// entity for User");
    }

    #[test]
    fn unknown_generator_is_an_error() {
        let svc = service();
        let provider = MapProvider(HashMap::new());

        let err = svc.invoke("nope", &provider, Path::new("out")).unwrap_err();
        assert!(matches!(
            err,
            PlinthError::Domain(DomainError::UnknownGenerator { .. })
        ));
    }

    #[test]
    fn unanswered_confirm_falls_back_to_default() {
        let svc = service();
        // Only "name" answered; with_dto defaults to false, so no DTO.
        let provider = MapProvider([("name", AnswerValue::Text("task".into()))].into());

        let emitted = svc.invoke("entity", &provider, Path::new("out")).unwrap();
        assert_eq!(emitted.len(), 1);
    }

    #[test]
    fn unanswered_text_without_default_is_missing_answer() {
        let svc = service();
        let provider = MapProvider(HashMap::new());

        let err = svc.invoke("entity", &provider, Path::new("out")).unwrap_err();
        assert!(matches!(
            err,
            PlinthError::Application(ApplicationError::MissingAnswer { .. })
        ));
    }

    #[test]
    fn wrongly_typed_answer_is_rejected() {
        let svc = service();
        let provider = MapProvider(
            [
                ("name", AnswerValue::Text("task".into())),
                ("with_dto", AnswerValue::Text("yes please".into())),
            ]
            .into(),
        );

        let err = svc.invoke("entity", &provider, Path::new("out")).unwrap_err();
        assert!(matches!(
            err,
            PlinthError::Application(ApplicationError::InvalidAnswer { .. })
        ));
    }

    #[test]
    fn preview_never_fails_on_filesystem() {
        let svc = service();
        let provider = MapProvider([("name", AnswerValue::Text("task".into()))].into());

        let emitted = svc.preview("entity", &provider, Path::new("out")).unwrap();
        assert_eq!(
            emitted[0].path,
            Path::new("out/src/domain/entities/Task.ts")
        );
    }
}
