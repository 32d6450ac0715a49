//! Embedded page templates.
//!
//! Markup is deliberately minimal: structure, navigation, and content only.
//! Styling and animation are out of scope for the server.

pub const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en" class="{{theme_class}}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{title}} | GraxxSocials</title>
</head>
<body>
  <header>
    <a href="/" class="logo">Graxx<span>Socials</span></a>
    <nav>
      {{#each nav}}
      <a href="{{path}}"{{#if active}} class="active"{{/if}}>{{label}}</a>
      {{/each}}
      <form method="post" action="/theme" class="theme-toggle">
        <button type="submit" aria-label="Toggle theme">{{theme_toggle_label}}</button>
      </form>
      <a class="cta" href="/contact">Book a Meeting</a>
    </nav>
  </header>
  <main>
{{{body}}}
  </main>
  <footer>
    <p>Elevating brands through futuristic design and strategic creativity. We build the digital presence of tomorrow.</p>
    <p>&copy; {{year}} GraxxSocials. All rights reserved.</p>
  </footer>
</body>
</html>
"#;

pub const HOME: &str = r#"<section data-page="home">
  <h1>Scale Your Brand With Premium Creative</h1>
  <p>From scroll-stopping video edits to complete brand identities, we craft the content your audience remembers.</p>
  <a class="cta" href="/services">Explore Services</a>
  <a class="cta" href="/contact">Get in Touch</a>
</section>
<section class="highlights">
  <h2>What We Do Best</h2>
  <ul class="grid">
    {{#each featured}}
    <li class="{{accent_class}}">
      <span class="glyph">{{glyph}}</span>
      <a href="/services/{{id}}">{{title}}</a>
      <p>{{description}}</p>
    </li>
    {{/each}}
  </ul>
</section>
"#;

pub const SERVICES: &str = r#"<section data-page="services">
  <h1>Our Services</h1>
  <p>Everything you need to grow, under one roof.</p>
  <h2>Core Services</h2>
  <ul class="grid grid-core">
    {{#each core}}
    <li class="{{accent_class}}">
      <span class="glyph">{{glyph}}</span>
      <a href="/services/{{id}}">{{title}}</a>
      <p>{{description}}</p>
    </li>
    {{/each}}
  </ul>
  <h2>Other Services</h2>
  <ul class="grid grid-other">
    {{#each other}}
    <li class="{{accent_class}}">
      <span class="glyph">{{glyph}}</span>
      <a href="/services/{{id}}">{{title}}</a>
      <p>{{description}}</p>
    </li>
    {{/each}}
  </ul>
</section>
"#;

pub const SERVICE_DETAIL: &str = r#"<article data-page="service-detail" data-service="{{id}}" class="{{accent_class}}">
  <p><a href="/services">&larr; All services</a></p>
  <h1><span class="glyph">{{glyph}}</span> {{title}}</h1>
  <p>{{long_description}}</p>
  <h2>What's Included</h2>
  <ul>
    {{#each features}}
    <li>{{this}}</li>
    {{/each}}
  </ul>
  <a class="cta" href="/contact">Start a Project</a>
</article>
"#;

pub const CONTACT: &str = r#"<section data-page="contact">
  <h1>Let's Talk</h1>
  <p>Ready to start your next project? We're here to help you scale.</p>
  {{#if errors}}
  <ul class="form-errors">
    {{#each errors}}
    <li>{{this}}</li>
    {{/each}}
  </ul>
  {{/if}}
  <form method="post" action="/contact">
    <label for="name">Name</label>
    <input required type="text" id="name" name="name" value="{{values.name}}" placeholder="John Doe">
    <label for="email">Email</label>
    <input required type="email" id="email" name="email" value="{{values.email}}" placeholder="john@company.com">
    <label for="service">Interested Service</label>
    <select id="service" name="service">
      {{#each services}}
      <option{{#if selected}} selected{{/if}}>{{title}}</option>
      {{/each}}
      <option>Other</option>
    </select>
    <label for="message">Project Details</label>
    <textarea required id="message" name="message" rows="4" placeholder="Tell us about your goals and timeline...">{{values.message}}</textarea>
    <button type="submit"{{#if submitting}} disabled{{/if}}>
      {{#if submitting}}Sending...{{else}}Send Message{{/if}}
    </button>
  </form>
</section>
"#;

pub const CONTACT_SUCCESS: &str = r#"<section data-page="contact-success">
  <h1>Message Sent!</h1>
  <p>We'll get back to you within 24 hours.</p>
  <form method="post" action="/contact/reset">
    <button type="submit">Send another message</button>
  </form>
</section>
"#;
