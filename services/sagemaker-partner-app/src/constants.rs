// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

// Service name used as the SigV4 signing name.
pub const SERVICE_NAME: &str = "sagemaker";

// Headers used by partner app requests. Names must stay lowercase.
pub const X_AMZ_TARGET: &str = "x-amz-target";
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_PARTNER_APP_AUTHORIZATION: &str = "x-amz-partner-app-authorization";
pub const X_SAGEMAKER_PARTNER_APP_SERVER_ARN: &str = "x-sagemaker-partner-app-server-arn";

// Header values.
pub const CALL_PARTNER_APP_API_ACTION: &str = "SageMaker.CallPartnerAppApi";
/// Hash of the empty payload.
pub const EMPTY_SHA256_HASH: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
/// Payload hash used for streamed bodies when unsigned payloads are allowed.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

// Env values used by partner app clients.
pub const AWS_PARTNER_APP_ARN: &str = "AWS_PARTNER_APP_ARN";
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const AWS_PROFILE: &str = "AWS_PROFILE";
pub const AWS_CONFIG_FILE: &str = "AWS_CONFIG_FILE";
pub const AWS_SHARED_CREDENTIALS_FILE: &str = "AWS_SHARED_CREDENTIALS_FILE";
