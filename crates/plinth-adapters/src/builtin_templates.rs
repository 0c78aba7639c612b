//! Builtin template table.
//!
//! Content for every file the builtin generators can emit. Templates are
//! parameterized TypeScript sources; `{{VARIABLE}}` placeholders are filled in
//! by the renderer from the invocation's context.
//!
//! Available variables depend on the generator's prompts: a text answer `name`
//! yields `NAME`, `NAME_PASCAL`, and `NAME_CAMEL`; the adapter generator's
//! port template additionally receives `METHODS` and `METHOD_COUNT` derived
//! from the parsed method signatures.

use plinth_core::domain::TemplateId;

pub const ENTITY: TemplateId = TemplateId("entity");
pub const ENTITY_TEST: TemplateId = TemplateId("entity.test");
pub const MAPPER: TemplateId = TemplateId("mapper");
pub const MAPPER_TEST: TemplateId = TemplateId("mapper.test");
pub const DTO: TemplateId = TemplateId("dto");
pub const USECASE: TemplateId = TemplateId("usecase");
pub const PORT: TemplateId = TemplateId("port");
pub const SERVICE: TemplateId = TemplateId("service");
pub const ADAPTER: TemplateId = TemplateId("adapter");
pub const ADAPTER_TEST: TemplateId = TemplateId("adapter.test");
pub const PORT_FROM_ADAPTER: TemplateId = TemplateId("port_from_adapter");
pub const STORE: TemplateId = TemplateId("store");
pub const COMPONENT: TemplateId = TemplateId("component");

/// Look up a builtin template's source by id.
pub fn source(id: &TemplateId) -> Option<&'static str> {
    let source = match id.0 {
        "entity" => {
            r#"export interface {{NAME_PASCAL}} {
  id: string
}

export function validate{{NAME_PASCAL}}(value: {{NAME_PASCAL}}): boolean {
  return !!value.id
}
"#
        }
        "entity.test" => {
            r#"import { {{NAME_PASCAL}}, validate{{NAME_PASCAL}} } from '../{{NAME_PASCAL}}'

describe('{{NAME_PASCAL}}', () => {
  it('accepts a valid {{NAME_CAMEL}}', () => {
    const {{NAME_CAMEL}}: {{NAME_PASCAL}} = { id: '1' }
    expect(validate{{NAME_PASCAL}}({{NAME_CAMEL}})).toBe(true)
  })

  it('rejects an empty id', () => {
    const {{NAME_CAMEL}}: {{NAME_PASCAL}} = { id: '' }
    expect(validate{{NAME_PASCAL}}({{NAME_CAMEL}})).toBe(false)
  })
})
"#
        }
        "mapper" => {
            r#"import { {{NAME_PASCAL}} } from '../../domain/entities/{{NAME_PASCAL}}'

export function dbTo{{NAME_PASCAL}}(db: any): {{NAME_PASCAL}} {
  return {
    id: db.id,
  }
}

export function {{NAME_CAMEL}}ToDb({{NAME_CAMEL}}: {{NAME_PASCAL}}): any {
  return { ...{{NAME_CAMEL}} }
}
"#
        }
        "mapper.test" => {
            r#"import { dbTo{{NAME_PASCAL}}, {{NAME_CAMEL}}ToDb } from '../{{NAME_PASCAL}}Mapper'

describe('{{NAME_PASCAL}}Mapper', () => {
  it('round-trips a {{NAME_CAMEL}} row', () => {
    const row = { id: '1' }
    expect({{NAME_CAMEL}}ToDb(dbTo{{NAME_PASCAL}}(row))).toEqual(row)
  })
})
"#
        }
        "dto" => {
            r#"export interface {{NAME_PASCAL}}DTO {
  id: string
}
"#
        }
        "usecase" => {
            r#"export class {{NAME_PASCAL}}UseCase {
  async execute(): Promise<void> {
    throw new Error('Not implemented')
  }
}
"#
        }
        "port" => {
            r#"export interface {{NAME_PASCAL}}Port {
}
"#
        }
        "service" => {
            r#"export class {{NAME_PASCAL}}ServiceImpl {
}
"#
        }
        "adapter" => {
            r#"import { {{NAME_PASCAL}}Port } from '../../domain/ports/{{NAME_PASCAL}}Port'

export class {{NAME_PASCAL}}Impl implements {{NAME_PASCAL}}Port {
}
"#
        }
        "adapter.test" => {
            r#"import { {{NAME_PASCAL}}Impl } from '../{{NAME_PASCAL}}Impl'

describe('{{NAME_PASCAL}}Impl', () => {
  it('constructs', () => {
    expect(new {{NAME_PASCAL}}Impl()).toBeDefined()
  })
})
"#
        }
        "port_from_adapter" => {
            r#"export interface {{NAME_PASCAL}}Port {
{{METHODS}}
}
"#
        }
        "store" => {
            r#"import { create } from 'zustand'

interface {{NAME_PASCAL}}State {
  loading: boolean
  error: string | null
}

export const use{{NAME_PASCAL}}Store = create<{{NAME_PASCAL}}State>((set) => ({
  loading: false,
  error: null,
}))
"#
        }
        "component" => {
            r#"'use client'
import React from 'react'

export const {{NAME_PASCAL}}: React.FC = () => {
  return <div>{{NAME_PASCAL}}</div>
}
"#
        }
        _ => return None,
    };
    Some(source)
}
