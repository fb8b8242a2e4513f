//! Templates shipped with the service

use chrono::{DateTime, Utc};

use super::extract::extract_variables;
use super::types::Template;

const SEO_OPTIMIZED: &str = r#"<div class="product-description">
  <h2>{{title}}</h2>
  <p class="lead">{{description}}</p>

  <div class="features">
    <h3>Key Features:</h3>
    <ul>
      <li>SKU: {{sku}}</li>
      <li>Category: {{category}}</li>
      <li>Vendor: {{vendor}}</li>
    </ul>
  </div>

  <div class="pricing">
    <h3>Pricing Information:</h3>
    <p><strong>Price:</strong> ${{price}}</p>
    <p><strong>Stock:</strong> {{inventory}} units available</p>
  </div>

  <div class="meta">
    <p><em>Last updated: {{lastUpdated}}</em></p>
  </div>
</div>"#;

const MARKETING_FOCUSED: &str = r#"<div class="marketing-description">
  <h1>🚀 {{title}} - Transform Your Experience!</h1>

  <div class="hero-section">
    <p class="headline">{{description}}</p>
    <p class="value-prop"><strong>Why choose {{title}}?</strong> Because excellence matters!</p>
  </div>

  <div class="features-grid">
    <div class="feature-card">
      <h3>✨ Premium Quality</h3>
      <p>Product Code: {{sku}}</p>
    </div>
    <div class="feature-card">
      <h3>🏆 Trusted Brand</h3>
      <p>By {{vendor}} in {{category}}</p>
    </div>
    <div class="feature-card">
      <h3>💰 Great Value</h3>
      <p>Only ${{price}} - {{inventory}} left in stock!</p>
    </div>
  </div>

  <div class="cta-section">
    <p><strong>Don't miss out!</strong> Order now while supplies last.</p>
  </div>
</div>"#;

const TECHNICAL_DETAILED: &str = r#"<div class="technical-specs">
  <header>
    <h1>{{title}}</h1>
    <p class="subtitle">Model: {{sku}} | Category: {{category}}</p>
  </header>

  <section class="overview">
    <h2>Product Overview</h2>
    <p>{{description}}</p>
  </section>

  <section class="specifications">
    <h2>Technical Specifications</h2>
    <table>
      <tr><td><strong>SKU:</strong></td><td>{{sku}}</td></tr>
      <tr><td><strong>Category:</strong></td><td>{{category}}</td></tr>
      <tr><td><strong>Manufacturer:</strong></td><td>{{vendor}}</td></tr>
      <tr><td><strong>Price:</strong></td><td>${{price}}</td></tr>
      <tr><td><strong>Availability:</strong></td><td>{{inventory}} units</td></tr>
    </table>
  </section>

  <section class="additional-info">
    <h2>Additional Information</h2>
    <p><small>Product information last updated: {{lastUpdated}}</small></p>
  </section>
</div>"#;

const MINIMALIST: &str = r#"<div class="minimalist-description">
  <h1>{{title}}</h1>

  <p>{{description}}</p>

  <div class="essentials">
    <p><strong>${{price}}</strong></p>
    <p>{{inventory}} available</p>
    <p><small>{{sku}}</small></p>
  </div>
</div>"#;

/// The built-in templates, stamped with `now`
pub(crate) fn builtin_templates(now: DateTime<Utc>) -> Vec<Template> {
    let definitions = [
        (
            "SEO Optimized",
            "Search engine optimized product descriptions with structured content",
            SEO_OPTIMIZED,
        ),
        (
            "Marketing Focused",
            "Persuasive copy designed to drive conversions and sales",
            MARKETING_FOCUSED,
        ),
        (
            "Technical Detailed",
            "Comprehensive technical specifications and features",
            TECHNICAL_DETAILED,
        ),
        (
            "Minimalist",
            "Clean and simple product presentation",
            MINIMALIST,
        ),
    ];

    definitions
        .into_iter()
        .zip(1u32..)
        .map(|((name, description, content), id)| Template {
            id,
            name: name.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            variables: extract_variables(content),
            is_custom: false,
            created_at: now,
            updated_at: now,
        })
        .collect()
}
