// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! TCP server implementation.
//!
//! Handles client connections and request dispatch. Each connection is a
//! stream of newline-delimited JSON requests; every request gets exactly
//! one JSON response line. A failing request produces an error response on
//! that connection and never affects other connections or the process.

use std::net::SocketAddr;

use chrono::NaiveDate;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use roster_core::protocol::{STATUS_BAD_REQUEST, STATUS_NOT_FOUND};
use roster_core::{Error, FilterSet, RawClause, Request, Response};

use crate::state::ServerState;

/// Run the server on the given address.
pub async fn run(addr: SocketAddr, state: ServerState) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on: {}", addr);

    loop {
        let (stream, peer_addr) = listener.accept().await?;
        let state = state.clone();

        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer_addr, state).await {
                error!("Connection error from {}: {}", peer_addr, e);
            }
        });
    }
}

/// Handle a single client connection.
pub(crate) async fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: ServerState,
) -> std::io::Result<()> {
    info!("New connection from: {}", peer_addr);

    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_request(&line, &state).await;
        let json = match response.to_json() {
            Ok(json) => json,
            Err(e) => {
                // Responses always serialize; treat a failure as fatal for
                // this connection only.
                warn!("Failed to serialize response for {}: {}", peer_addr, e);
                break;
            }
        };
        write_half.write_all(json.as_bytes()).await?;
        write_half.write_all(b"\n").await?;
    }

    info!("Connection closed: {}", peer_addr);
    Ok(())
}

/// Process one request line and produce the response.
///
/// All four outcome classes are mapped to status codes here: malformed
/// input to 400, conflicts to 409, absent resources to 404, and store
/// faults to 500. Faults are isolated to the request.
pub(crate) async fn handle_request(text: &str, state: &ServerState) -> Response {
    let request = match Request::from_json(text) {
        Ok(request) => request,
        Err(e) => {
            debug!("Malformed request: {}", e);
            return Response::error(
                STATUS_BAD_REQUEST,
                Error::MalformedRequest(e.to_string()).to_string(),
            );
        }
    };
    debug!("Received request: {:?}", request);

    match dispatch(request, state).await {
        Ok(response) => response,
        Err(e) => {
            debug!("Request failed: {}", e);
            Response::error(e.kind().status(), e.to_string())
        }
    }
}

/// Execute a parsed request against the store.
async fn dispatch(request: Request, state: &ServerState) -> roster_core::Result<Response> {
    match request {
        Request::ListEmployees => {
            let employees = state.db().await.all_employees()?;
            Ok(Response::employees(employees))
        }

        Request::GetEmployee { id } => {
            let employee = state.db().await.get_employee(id)?;
            match employee {
                Some(employee) => Ok(Response::employee(employee)),
                None => Err(Error::EmployeeNotFound(id)),
            }
        }

        Request::CreateEmployee { employee } => {
            let created = state.db().await.insert_employee(&employee)?;
            info!("Created employee {} ({})", created.id, created.name);
            Ok(Response::created(created))
        }

        Request::FilterEmployees { filters } => {
            let set = validate_filters(&filters)?;
            let admitted = state.db().await.filter_employees(&set, today())?;
            debug!("Filter admitted {} employees", admitted.len());
            // Zero matches on a read is still a success.
            Ok(Response::employees(admitted))
        }

        Request::DeleteEmployee { id } => {
            let removed = state.db().await.delete_employee(id)?;
            match removed {
                Some(employee) => {
                    info!("Deleted employee {}", id);
                    Ok(Response::employee(employee))
                }
                None => Err(Error::EmployeeNotFound(id)),
            }
        }

        Request::DeleteAllEmployees => {
            let count = state.db().await.delete_all()?;
            info!("Deleted all {} employees", count);
            Ok(Response::deleted(count))
        }

        Request::DeleteFiltered { filters } => {
            let set = validate_filters(&filters)?;
            let removed = state.db().await.delete_filtered(&set, today())?;
            if removed.is_empty() {
                // A filtered delete that matches nothing is a not-found
                // outcome, unlike the filtered read above.
                return Ok(Response::Employees {
                    code: STATUS_NOT_FOUND,
                    employees: vec![],
                });
            }
            info!("Deleted {} employees by filter", removed.len());
            Ok(Response::employees(removed))
        }
    }
}

/// Validate the raw clauses of a filter request.
fn validate_filters(filters: &[RawClause]) -> roster_core::Result<FilterSet> {
    FilterSet::validate(filters)
}

/// The evaluation date for derived age/tenure values: the server's local
/// calendar date, taken once per request.
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
