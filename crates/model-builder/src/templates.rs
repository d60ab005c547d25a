// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::operation::OperationKind;

pub fn request_template(kind: OperationKind) -> String {
    match kind {
        OperationKind::Get => r#"{
  "version": "2017-02-28",
  "operation": "GetItem",
  "key": {
    "id": $util.dynamodb.toDynamoDBJson($ctx.args.id)
  }
}"#
        .to_string(),
        OperationKind::List => r#"{
  "version": "2017-02-28",
  "operation": "Scan",
  "limit": $util.defaultIfNull($ctx.args.limit, 100),
  "nextToken": $util.toJson($util.defaultIfNullOrBlank($ctx.args.nextToken, null))
}"#
        .to_string(),
        OperationKind::Create => r##"{
  "version": "2017-02-28",
  "operation": "PutItem",
  "key": {
    "id": $util.dynamodb.toDynamoDBJson($ctx.args.input.id)
  },
  "attributeValues": $util.dynamodb.toMapValuesJson($ctx.args.input),
  "condition": {
    "expression": "attribute_not_exists(#id)",
    "expressionNames": { "#id": "id" }
  }
}"##
        .to_string(),
        OperationKind::Update => r##"{
  "version": "2017-02-28",
  "operation": "PutItem",
  "key": {
    "id": $util.dynamodb.toDynamoDBJson($ctx.args.input.id)
  },
  "attributeValues": $util.dynamodb.toMapValuesJson($ctx.args.input),
  "condition": {
    "expression": "attribute_exists(#id)",
    "expressionNames": { "#id": "id" }
  }
}"##
        .to_string(),
        OperationKind::Delete => r#"{
  "version": "2017-02-28",
  "operation": "DeleteItem",
  "key": {
    "id": $util.dynamodb.toDynamoDBJson($ctx.args.input.id)
  }
}"#
        .to_string(),
    }
}

pub fn response_template(_kind: OperationKind) -> String {
    "$util.toJson($ctx.result)".to_string()
}

/// Content deferred to the finalize phase: seeds the identifier and the
/// timestamps before the write template reads the input.
pub fn hoisted_content(kind: OperationKind) -> Option<String> {
    match kind {
        OperationKind::Create => Some(
            [
                r#"$util.qr($ctx.args.input.put("id", $util.defaultIfNull($ctx.args.input.id, $util.autoId())))"#,
                r#"$util.qr($ctx.args.input.put("createdAt", $util.defaultIfNull($ctx.args.input.createdAt, $util.time.nowISO8601())))"#,
                r#"$util.qr($ctx.args.input.put("updatedAt", $util.defaultIfNull($ctx.args.input.updatedAt, $util.time.nowISO8601())))"#,
            ]
            .join("\n"),
        ),
        OperationKind::Update => Some(
            r#"$util.qr($ctx.args.input.put("updatedAt", $util.defaultIfNull($ctx.args.input.updatedAt, $util.time.nowISO8601())))"#
                .to_string(),
        ),
        _ => None,
    }
}
