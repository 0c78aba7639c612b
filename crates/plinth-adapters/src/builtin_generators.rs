//! The builtin generator set.
//!
//! Seven generators scaffolding the layers of a hexagonal TypeScript
//! application: domain entities, use cases, ports, infrastructure services
//! and adapters, Zustand stores, and UI components.

use plinth_core::application::GeneratorRegistry;
use plinth_core::domain::{ActionSpec, DeriveData, GeneratorSpec, Predicate, PromptSpec};
use plinth_core::error::PlinthResult;

use crate::builtin_templates as tpl;

/// A registry populated with every builtin generator.
pub fn builtin_registry() -> PlinthResult<GeneratorRegistry> {
    let mut registry = GeneratorRegistry::new();
    for spec in builtin_generators()? {
        registry.register(spec)?;
    }
    Ok(registry)
}

/// The builtin generators in their canonical listing order.
pub fn builtin_generators() -> PlinthResult<Vec<GeneratorSpec>> {
    Ok(vec![
        entity()?,
        usecase()?,
        port()?,
        service()?,
        adapter()?,
        store()?,
        component()?,
    ])
}

fn entity() -> PlinthResult<GeneratorSpec> {
    let spec = GeneratorSpec::builder()
        .name("entity")
        .description("Create new domain entity")
        .prompt(PromptSpec::text("name", "Entity name:"))
        .prompt(PromptSpec::confirm(
            "with_dto",
            "Generate a DTO for this entity?",
            false,
        ))
        .action(ActionSpec::add(
            "src/domain/entities/{{NAME_PASCAL}}.ts",
            tpl::ENTITY,
        ))
        .action(ActionSpec::add(
            "src/domain/entities/__tests__/{{NAME_PASCAL}}.test.ts",
            tpl::ENTITY_TEST,
        ))
        .action(ActionSpec::add(
            "src/infrastructure/mappers/{{NAME_PASCAL}}Mapper.ts",
            tpl::MAPPER,
        ))
        .action(ActionSpec::add(
            "src/infrastructure/mappers/__tests__/{{NAME_PASCAL}}Mapper.test.ts",
            tpl::MAPPER_TEST,
        ))
        .action(ActionSpec::conditional(
            "src/domain/dtos/{{NAME_PASCAL}}DTO.ts",
            tpl::DTO,
            Predicate::flag_is_true("with_dto"),
        ))
        .build()?;
    Ok(spec)
}

fn usecase() -> PlinthResult<GeneratorSpec> {
    let spec = GeneratorSpec::builder()
        .name("usecase")
        .description("Create new use case")
        .prompt(PromptSpec::text("name", "Use case name:"))
        .action(ActionSpec::add(
            "src/application/usecases/{{NAME_PASCAL}}UseCase.ts",
            tpl::USECASE,
        ))
        .build()?;
    Ok(spec)
}

fn port() -> PlinthResult<GeneratorSpec> {
    let spec = GeneratorSpec::builder()
        .name("port")
        .description("Create new port")
        .prompt(PromptSpec::text("name", "Port name:"))
        .action(ActionSpec::add(
            "src/domain/ports/{{NAME_PASCAL}}Port.ts",
            tpl::PORT,
        ))
        .build()?;
    Ok(spec)
}

fn service() -> PlinthResult<GeneratorSpec> {
    let spec = GeneratorSpec::builder()
        .name("service")
        .description("Create new infrastructure service")
        .prompt(PromptSpec::text("name", "Service name:"))
        .action(ActionSpec::add(
            "src/infrastructure/services/{{NAME_PASCAL}}ServiceImpl.ts",
            tpl::SERVICE,
        ))
        .build()?;
    Ok(spec)
}

fn adapter() -> PlinthResult<GeneratorSpec> {
    let spec = GeneratorSpec::builder()
        .name("adapter")
        .description("Create new adapter and matching port")
        .prompt(PromptSpec::text("name", "Adapter name:"))
        .prompt(PromptSpec::text(
            "methods",
            "Method signatures (comma-separated, e.g. \"saveUser(user: User): Promise<void>, findUser(id: string): Promise<User>\"):",
        ))
        .action(ActionSpec::add(
            "src/infrastructure/adapters/{{NAME_PASCAL}}Impl.ts",
            tpl::ADAPTER,
        ))
        .action(ActionSpec::add(
            "src/infrastructure/adapters/__tests__/{{NAME_PASCAL}}Impl.test.ts",
            tpl::ADAPTER_TEST,
        ))
        .action(ActionSpec::conditional_with(
            "src/domain/ports/{{NAME_PASCAL}}Port.ts",
            tpl::PORT_FROM_ADAPTER,
            Predicate::Always,
            DeriveData::method_signatures("methods"),
        ))
        .build()?;
    Ok(spec)
}

fn store() -> PlinthResult<GeneratorSpec> {
    let spec = GeneratorSpec::builder()
        .name("store")
        .description("Create new Zustand store")
        .prompt(PromptSpec::text("name", "Store name:"))
        .action(ActionSpec::add(
            "src/ui/stores/{{NAME_CAMEL}}Store.ts",
            tpl::STORE,
        ))
        .build()?;
    Ok(spec)
}

fn component() -> PlinthResult<GeneratorSpec> {
    let spec = GeneratorSpec::builder()
        .name("component")
        .description("Create new UI component")
        .prompt(PromptSpec::text("name", "Component name:"))
        .action(ActionSpec::add(
            "src/ui/components/{{NAME_PASCAL}}.tsx",
            tpl::COMPONENT,
        ))
        .build()?;
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use crate::renderer::SimpleRenderer;
    use plinth_core::application::{
        GeneratorService,
        ports::{AnswerProvider, Filesystem},
    };
    use plinth_core::domain::{AnswerValue, PromptSpec};
    use plinth_core::error::PlinthResult;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    struct MapProvider(HashMap<&'static str, AnswerValue>);

    impl AnswerProvider for MapProvider {
        fn provide(&self, prompt: &PromptSpec) -> PlinthResult<Option<AnswerValue>> {
            Ok(self.0.get(prompt.name.as_str()).cloned())
        }
    }

    /// Filesystem double sharing its state with the test.
    struct SharedFs(Arc<MemoryFilesystem>);

    impl plinth_core::application::ports::Filesystem for SharedFs {
        fn create_dir_all(&self, path: &Path) -> PlinthResult<()> {
            self.0.create_dir_all(path)
        }
        fn write_file(&self, path: &Path, content: &str) -> PlinthResult<()> {
            self.0.write_file(path, content)
        }
        fn exists(&self, path: &Path) -> bool {
            self.0.exists(path)
        }
    }

    fn service() -> (GeneratorService, Arc<MemoryFilesystem>) {
        let fs = Arc::new(MemoryFilesystem::new());
        let service = GeneratorService::new(
            builtin_registry().unwrap(),
            Box::new(SimpleRenderer::new()),
            Box::new(SharedFs(Arc::clone(&fs))),
        );
        (service, fs)
    }

    #[test]
    fn registry_lists_all_seven_in_order() {
        let registry = builtin_registry().unwrap();
        let names: Vec<_> = registry.list().into_iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            ["entity", "usecase", "port", "service", "adapter", "store", "component"]
        );
    }

    #[test]
    fn every_builtin_prompt_has_a_unique_name() {
        for spec in builtin_generators().unwrap() {
            assert!(spec.validate().is_ok(), "invalid builtin '{}'", spec.name);
        }
    }

    #[test]
    fn entity_without_dto_emits_four_files() {
        let (service, fs) = service();
        let provider = MapProvider([("name", AnswerValue::Text("user profile".into()))].into());

        let emitted = service.invoke("entity", &provider, Path::new(".")).unwrap();

        let paths: Vec<_> = emitted.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("./src/domain/entities/UserProfile.ts"),
                PathBuf::from("./src/domain/entities/__tests__/UserProfile.test.ts"),
                PathBuf::from("./src/infrastructure/mappers/UserProfileMapper.ts"),
                PathBuf::from("./src/infrastructure/mappers/__tests__/UserProfileMapper.test.ts"),
            ]
        );
        assert_eq!(fs.file_count(), 4);
    }

    #[test]
    fn entity_with_dto_adds_the_dto_file() {
        let (service, fs) = service();
        let provider = MapProvider(
            [
                ("name", AnswerValue::Text("task".into())),
                ("with_dto", AnswerValue::Flag(true)),
            ]
            .into(),
        );

        let emitted = service.invoke("entity", &provider, Path::new(".")).unwrap();
        assert_eq!(emitted.len(), 5);
        assert!(
            fs.read_file(Path::new("./src/domain/dtos/TaskDTO.ts"))
                .unwrap()
                .contains("export interface TaskDTO")
        );
    }

    #[test]
    fn adapter_derives_the_port_from_method_signatures() {
        let (service, fs) = service();
        let provider = MapProvider(
            [
                ("name", AnswerValue::Text("user repository".into())),
                (
                    "methods",
                    AnswerValue::Text(
                        "saveUser(user: User): Promise<void>, findUser(id: string): Promise<User>"
                            .into(),
                    ),
                ),
            ]
            .into(),
        );

        service.invoke("adapter", &provider, Path::new(".")).unwrap();

        let port = fs
            .read_file(Path::new("./src/domain/ports/UserRepositoryPort.ts"))
            .unwrap();
        assert!(port.contains("export interface UserRepositoryPort {"));
        assert!(port.contains("  saveUser(user: User): Promise<void>"));
        assert!(port.contains("  findUser(id: string): Promise<User>"));
    }

    #[test]
    fn store_path_uses_camel_case() {
        let (service, fs) = service();
        let provider = MapProvider([("name", AnswerValue::Text("user session".into()))].into());

        service.invoke("store", &provider, Path::new(".")).unwrap();
        assert!(fs.exists(Path::new("./src/ui/stores/userSessionStore.ts")));
    }

    #[test]
    fn component_lands_in_the_ui_layer() {
        let (service, fs) = service();
        let provider = MapProvider([("name", AnswerValue::Text("user form".into()))].into());

        let emitted = service
            .invoke("component", &provider, Path::new("app"))
            .unwrap();
        assert_eq!(
            emitted[0].path,
            PathBuf::from("app/src/ui/components/UserForm.tsx")
        );
        assert!(emitted[0].content.contains("export const UserForm: React.FC"));
        assert_eq!(fs.file_count(), 1);
    }

    #[test]
    fn single_prompt_generators_emit_one_file_each() {
        for (generator, expected) in [
            ("usecase", "./src/application/usecases/SyncDataUseCase.ts"),
            ("port", "./src/domain/ports/SyncDataPort.ts"),
            ("service", "./src/infrastructure/services/SyncDataServiceImpl.ts"),
        ] {
            let (service, fs) = service();
            let provider = MapProvider([("name", AnswerValue::Text("sync data".into()))].into());
            service.invoke(generator, &provider, Path::new(".")).unwrap();
            assert!(fs.exists(Path::new(expected)), "{generator} missed {expected}");
        }
    }
}
