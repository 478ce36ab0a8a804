// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The execution-side index an `ExecutionClient` consults when reconciling venue events
//! against locally known orders.

use indexmap::IndexMap;
use nautilus_model::identifiers::{ClientOrderId, VenueOrderId};

/// A bidirectional `ClientOrderId` ↔ `VenueOrderId` index.
///
/// This is deliberately narrow: it carries only the mapping the execution-client event
/// contract depends on, not a general order/position/instrument/account store.
#[derive(Debug, Default)]
pub struct Cache {
    venue_order_ids: IndexMap<ClientOrderId, VenueOrderId>,
    client_order_ids: IndexMap<VenueOrderId, ClientOrderId>,
}

impl Cache {
    /// Creates a new, empty [`Cache`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the venue-assigned order ID for `client_order_id`.
    ///
    /// If a mapping already exists and disagrees with `venue_order_id`, the call fails
    /// unless `overwrite` is `true`.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing, differing mapping is present and `overwrite` is `false`.
    pub fn add_venue_order_id(
        &mut self,
        client_order_id: &ClientOrderId,
        venue_order_id: &VenueOrderId,
        overwrite: bool,
    ) -> anyhow::Result<()> {
        if let Some(existing) = self.venue_order_ids.get(client_order_id)
            && existing != venue_order_id
            && !overwrite
        {
            anyhow::bail!(
                "Existing venue order ID {existing} for client order ID {client_order_id} \
                 does not match the given {venue_order_id}"
            );
        }

        self.venue_order_ids.insert(*client_order_id, *venue_order_id);
        self.client_order_ids.insert(*venue_order_id, *client_order_id);
        Ok(())
    }

    /// Returns the client order ID mapped to `venue_order_id`, if any.
    #[must_use]
    pub fn client_order_id(&self, venue_order_id: &VenueOrderId) -> Option<&ClientOrderId> {
        self.client_order_ids.get(venue_order_id)
    }

    /// Returns the venue order ID mapped to `client_order_id`, if any.
    #[must_use]
    pub fn venue_order_id(&self, client_order_id: &ClientOrderId) -> Option<&VenueOrderId> {
        self.venue_order_ids.get(client_order_id)
    }
}
