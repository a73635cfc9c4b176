//! End-to-end composition of the classic petstore document.

use openapi_composer::{
    HttpMethod, OpenApiDocument, OperationOptions, OperationSchemas, PathItemOptions,
    ResponseOptions, ResponsesOptions,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn default_error_response() -> Value {
    json!({
        "default": {
            "description": "unexpected error",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/Error" }
                }
            }
        }
    })
}

fn petstore() -> OpenApiDocument {
    let mut document = OpenApiDocument::new(json!({
        "openapi": "3.0.0",
        "info": {
            "version": "1.0.0",
            "title": "Swagger Petstore",
            "license": { "name": "MIT" }
        },
        "servers": [{ "url": "http://petstore.swagger.io/v1" }],
        "components": {
            "schemas": {
                "Pet": {
                    "type": "object",
                    "required": ["id", "name"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" },
                        "tag": { "type": "string" }
                    }
                },
                "Pets": {
                    "type": "array",
                    "maxItems": 100,
                    "items": { "$ref": "#/components/schemas/Pet" }
                },
                "Error": {
                    "type": "object",
                    "required": ["code", "message"],
                    "properties": {
                        "code": { "type": "integer", "format": "int32" },
                        "message": { "type": "string" }
                    }
                }
            }
        }
    }))
    .unwrap();

    document
        .define(
            "/pets",
            HttpMethod::Get,
            OperationSchemas {
                query: Some(json!({
                    "type": "object",
                    "properties": {
                        "limit": {
                            "type": "integer",
                            "description": "How many items to return at one time (max 100)",
                            "maximum": 100,
                            "format": "int32"
                        }
                    }
                })),
                response: Some(json!({ "$ref": "#/components/schemas/Pets" })),
                ..Default::default()
            },
            &PathItemOptions {
                operation: OperationOptions {
                    overwrite: Some(json!({
                        "summary": "List all pets",
                        "operationId": "listPets",
                        "tags": ["pets"]
                    })),
                    responses: ResponsesOptions {
                        response: ResponseOptions {
                            overwrite: Some(json!({
                                "description": "A paged array of pets",
                                "headers": {
                                    "x-next": {
                                        "description": "A link to the next page of responses",
                                        "schema": { "type": "string" }
                                    }
                                }
                            })),
                            ..Default::default()
                        },
                        overwrite: Some(default_error_response()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .unwrap();

    document
        .define(
            "/pets",
            HttpMethod::Post,
            OperationSchemas {
                body: Some(json!({ "$ref": "#/components/schemas/Pet" })),
                ..Default::default()
            },
            &PathItemOptions {
                operation: OperationOptions {
                    overwrite: Some(json!({
                        "summary": "Create a pet",
                        "operationId": "createPets",
                        "tags": ["pets"]
                    })),
                    responses: ResponsesOptions {
                        http_code: Some(201),
                        response: ResponseOptions {
                            overwrite: Some(json!({ "description": "Null response" })),
                            ..Default::default()
                        },
                        overwrite: Some(default_error_response()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .unwrap();

    document
        .define(
            "/pets/{petId}",
            HttpMethod::Get,
            OperationSchemas {
                path: Some(json!({
                    "type": "object",
                    "properties": {
                        "petId": {
                            "type": "string",
                            "description": "The id of the pet to retrieve"
                        }
                    },
                    "required": ["petId"]
                })),
                response: Some(json!({ "$ref": "#/components/schemas/Pet" })),
                ..Default::default()
            },
            &PathItemOptions {
                operation: OperationOptions {
                    overwrite: Some(json!({
                        "summary": "Info for a specific pet",
                        "operationId": "showPetById",
                        "tags": ["pets"]
                    })),
                    responses: ResponsesOptions {
                        response: ResponseOptions {
                            overwrite: Some(json!({
                                "description": "Expected response to a valid request"
                            })),
                            ..Default::default()
                        },
                        overwrite: Some(default_error_response()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .unwrap();

    document
}

fn expected_paths() -> Value {
    json!({
        "/pets": {
            "get": {
                "summary": "List all pets",
                "operationId": "listPets",
                "tags": ["pets"],
                "parameters": [
                    {
                        "name": "limit",
                        "in": "query",
                        "description": "How many items to return at one time (max 100)",
                        "required": false,
                        "schema": {
                            "type": "integer",
                            "maximum": 100,
                            "format": "int32"
                        }
                    }
                ],
                "requestBody": { "content": {} },
                "responses": {
                    "200": {
                        "description": "A paged array of pets",
                        "headers": {
                            "x-next": {
                                "description": "A link to the next page of responses",
                                "schema": { "type": "string" }
                            }
                        },
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Pets" }
                            }
                        }
                    },
                    "default": {
                        "description": "unexpected error",
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Error" }
                            }
                        }
                    }
                }
            },
            "post": {
                "summary": "Create a pet",
                "operationId": "createPets",
                "tags": ["pets"],
                "parameters": [],
                "requestBody": {
                    "required": true,
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/Pet" }
                        }
                    }
                },
                "responses": {
                    "201": { "description": "Null response" },
                    "default": {
                        "description": "unexpected error",
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Error" }
                            }
                        }
                    }
                }
            }
        },
        "/pets/{petId}": {
            "get": {
                "summary": "Info for a specific pet",
                "operationId": "showPetById",
                "tags": ["pets"],
                "parameters": [
                    {
                        "name": "petId",
                        "in": "path",
                        "description": "The id of the pet to retrieve",
                        "required": true,
                        "schema": { "type": "string" }
                    }
                ],
                "requestBody": { "content": {} },
                "responses": {
                    "200": {
                        "description": "Expected response to a valid request",
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Pet" }
                            }
                        }
                    },
                    "default": {
                        "description": "unexpected error",
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Error" }
                            }
                        }
                    }
                }
            }
        }
    })
}

#[test]
fn test_petstore_document_round_trip() {
    let document = petstore();

    let serialized: Value = serde_json::from_str(&document.json().unwrap()).unwrap();
    assert_eq!(serialized["paths"], expected_paths());
    assert_eq!(serialized["openapi"], json!("3.0.0"));
    assert_eq!(serialized["info"]["title"], json!("Swagger Petstore"));
    assert_eq!(
        serialized["components"]["schemas"]["Pets"]["maxItems"],
        json!(100)
    );
}

#[test]
fn test_petstore_yaml_contains_all_paths() {
    let yaml = petstore().yaml().unwrap();
    assert!(yaml.contains("/pets"));
    assert!(yaml.contains("/pets/{petId}"));
    assert!(yaml.contains("operationId: listPets"));
}

#[test]
fn test_typed_model_round_trip() {
    use utoipa::openapi::{InfoBuilder, OpenApiBuilder};

    let base = OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("Typed API")
                .version("1.0.0")
                .build(),
        )
        .build();

    let mut document = OpenApiDocument::from_openapi(base).unwrap();
    document
        .define(
            "/pets",
            HttpMethod::Get,
            OperationSchemas::default(),
            &PathItemOptions::default(),
        )
        .unwrap();

    let openapi = document.into_openapi().unwrap();
    assert_eq!(openapi.info.title, "Typed API");
    assert_eq!(openapi.paths.paths.len(), 1);
}
